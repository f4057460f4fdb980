//! Value to text conversion.
//!
//! [`Display`] renders decimal; [`LowerHex`] and [`UpperHex`] render the
//! magnitude's limbs, with the alternate flag (`{:#x}`) adding the `0x`
//! prefix. The sign always comes first: `-0x1f`.

use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::{self, Debug, Display, LowerHex, UpperHex};

use crate::{
    arithmetic::{Limb, Uint256},
    Int256,
};

/// Decimal rendering extracts this many digits per division.
const DECIMAL_CHUNK_DIGITS: usize = 9;
/// `10^DECIMAL_CHUNK_DIGITS`.
const DECIMAL_CHUNK: Limb = 1_000_000_000;
/// `2^256 - 1` has 78 decimal digits.
const MAX_DECIMAL_CHUNKS: usize = 78_usize.div_ceil(DECIMAL_CHUNK_DIGITS);

impl Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Chunks come out least significant first.
        let mut chunks = [Limb::MIN; MAX_DECIMAL_CHUNKS];
        let mut len = 0;
        let mut work = self.to_wide();
        loop {
            let (quotient, chunk) = work.ct_div_rem_limb(DECIMAL_CHUNK);
            chunks[len] = chunk;
            len += 1;
            work = quotient;
            if work.ct_is_zero() {
                break;
            }
        }

        let (leading, rest) = chunks[..len].split_last().ok_or(fmt::Error)?;
        write!(f, "{leading}")?;
        for chunk in rest.iter().rev() {
            write!(f, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

impl Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Hex digits of the limbs, skipping leading zero limbs. Zero renders as a
/// single `0`.
macro_rules! impl_hex {
    ($trait:ident, $first:literal, $padded:literal) => {
        impl $trait for Uint256 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let limbs = self.as_limbs();
                let start = limbs
                    .iter()
                    .position(|&limb| limb != 0)
                    .unwrap_or(limbs.len() - 1);

                write!(f, $first, limbs[start])?;
                for limb in &limbs[start + 1..] {
                    write!(f, $padded, limb)?;
                }
                Ok(())
            }
        }

        impl $trait for Int256 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_negative() {
                    f.write_str("-")?;
                }
                if f.alternate() {
                    f.write_str("0x")?;
                }
                $trait::fmt(&self.magnitude(), f)
            }
        }
    };
}

impl_hex!(LowerHex, "{:x}", "{:016x}");
impl_hex!(UpperHex, "{:X}", "{:016X}");

impl Display for Int256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        Display::fmt(&self.magnitude(), f)
    }
}

impl Debug for Int256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Int256 {
    /// Exact decimal digits, with a leading `-` for negative values.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    /// Sign, `0x`, then lowercase hex digits of the magnitude.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("{self:#x}")
    }
}

/// Render `value` in decimal.
///
/// ```
/// use int256::{format_decimal, Int256};
///
/// assert_eq!(format_decimal(&Int256::from(-1_000_000_007)), "-1000000007");
/// assert_eq!(format_decimal(&Int256::ZERO), "0");
/// ```
#[must_use]
pub fn format_decimal(value: &Int256) -> String {
    value.to_decimal_string()
}

/// Render `value` in hex with a `0x` prefix.
///
/// ```
/// use int256::{format_hex, Int256};
///
/// assert_eq!(format_hex(&Int256::from(-255)), "-0xff");
/// assert_eq!(format_hex(&Int256::ZERO), "0x0");
/// ```
#[must_use]
pub fn format_hex(value: &Int256) -> String {
    value.to_hex_string()
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{parse, test_helpers::int256_strategy};

    #[test]
    fn decimal_zero_and_small_values() {
        assert_eq!(format_decimal(&Int256::ZERO), "0");
        assert_eq!(format_decimal(&Int256::from(70u8)), "70");
        assert_eq!(format_decimal(&Int256::from(-3i8)), "-3");
    }

    #[test]
    fn decimal_keeps_zeros_inside_chunks() {
        assert_eq!(format_decimal(&Int256::from(1_000_000_000u64)), "1000000000");
        assert_eq!(
            format_decimal(&Int256::from(1_000_000_000_000_000_001u64)),
            "1000000000000000001"
        );
        assert_eq!(
            format_decimal(&Int256::from(-(10i128.pow(27)))),
            "-1000000000000000000000000000"
        );
    }

    #[test]
    fn decimal_full_width() {
        assert_eq!(
            format_decimal(&Int256::MAX),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(
            format_decimal(&Int256::MIN),
            "-115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn hex_skips_leading_zero_limbs_and_pads_the_rest() {
        assert_eq!(format_hex(&Int256::ZERO), "0x0");
        assert_eq!(format_hex(&Int256::from(-31i8)), "-0x1f");
        assert_eq!(
            format_hex(&Int256::from_limbs([0, 1, 0, 5], false)),
            "0x100000000000000000000000000000005"
        );
        assert_eq!(
            format_hex(&Int256::from_limbs([1 << 63, 0, 0, 0], false)),
            "0x8000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn hex_flags() {
        let value = Int256::from(-0xABCDi32);
        assert_eq!(format!("{value:x}"), "-abcd");
        assert_eq!(format!("{value:#X}"), "-0xABCD");
        assert_eq!(format!("{:X}", value.magnitude()), "ABCD");
        assert_eq!(format!("{value:?}"), "-43981");
    }

    proptest! {
        #[test]
        fn decimal_matches_reference(a in int256_strategy()) {
            prop_assert_eq!(a.to_decimal_string(), num_bigint::BigInt::from(a).to_string());
        }

        #[test]
        fn decimal_round_trips(a in int256_strategy()) {
            let outcome = parse(&format_decimal(&a));
            prop_assert!(outcome.is_clean());
            prop_assert_eq!(outcome.into_value(), a);
        }

        #[test]
        fn hex_round_trips(a in int256_strategy()) {
            let outcome = parse(&format_hex(&a));
            prop_assert!(outcome.is_clean());
            prop_assert_eq!(outcome.into_value(), a);
        }
    }
}
