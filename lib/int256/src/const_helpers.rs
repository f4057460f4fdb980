//! Helpers for writing loops inside `const fn`.

/// A `for` loop over an integer range that is usable inside `const fn`,
/// where iterators are not available.
///
/// ```ignore
/// ct_for!((i in 0..4) {
///     sum += limbs[i];
/// });
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! ct_for {
    (($i:ident in $start:tt..$end:tt) $code:expr) => {{
        let mut $i = $start;
        while $i < $end {
            $code
            $i += 1;
        }
    }};
}

/// Like [`ct_for!`], but walks the range from its last index down to its
/// first.
///
/// Limbs are stored most-significant-first, so carry and borrow chains walk
/// them in reverse.
#[macro_export]
#[doc(hidden)]
macro_rules! ct_for_rev {
    (($i:ident in $start:tt..$end:tt) $code:expr) => {{
        let mut __index = $end;
        while __index > $start {
            __index -= 1;
            let $i = __index;
            $code
        }
    }};
}
