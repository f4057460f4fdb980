//! Text to value conversion.
//!
//! Accepted syntax: optional surrounding whitespace, an optional `+` or `-`,
//! an optional base prefix (`0x`/`0X` for hexadecimal, `0b`/`0B` for binary,
//! decimal otherwise), then digits of that base. Parsing consumes the longest
//! run of valid digits; anything after it other than whitespace is reported,
//! but the value read so far is still returned. When the digits also
//! overflowed, the leftover text is what gets reported.

use core::str::FromStr;

use crate::{
    arithmetic::{Limb, Uint256},
    diagnostic::{Diagnostic, Outcome},
    Int256,
};

/// Result of scanning a token, before it is turned into an [`Outcome`].
struct Scan {
    value: Int256,
    digits: usize,
    overflow: bool,
    /// Byte offset of the first unconsumed, non-whitespace character.
    rest: Option<usize>,
}

impl Scan {
    fn into_outcome(self) -> Outcome<Int256> {
        // Leftover text outranks truncation.
        if let Some(position) = self.rest {
            Outcome::flagged(
                self.value,
                Diagnostic::TrailingCharacters { position },
            )
        } else if self.overflow {
            Outcome::flagged(self.value, Diagnostic::InputOverflow)
        } else {
            Outcome::clean(self.value)
        }
    }
}

// Same set as C's `isspace`, which includes vertical tab.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|&b| is_space(b)) {
        pos += 1;
    }
    pos
}

fn scan(text: &str) -> Scan {
    let bytes = text.as_bytes();
    let mut pos = skip_spaces(bytes, 0);

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let radix: u32 = match (bytes.get(pos), bytes.get(pos + 1)) {
        (Some(b'0'), Some(b'x' | b'X')) => {
            pos += 2;
            16
        }
        (Some(b'0'), Some(b'b' | b'B')) => {
            pos += 2;
            2
        }
        _ => 10,
    };

    let mut magnitude = Uint256::ZERO;
    let mut overflow = false;
    let mut digits = 0;
    while let Some(digit) =
        bytes.get(pos).and_then(|&b| char::from(b).to_digit(radix))
    {
        // Whatever is carried past the top limb is discarded.
        let (next, carry) =
            magnitude.ct_mul_limb_add(Limb::from(radix), Limb::from(digit));
        overflow |= carry != 0;
        magnitude = next;
        digits += 1;
        pos += 1;
    }

    let pos = skip_spaces(bytes, pos);
    let rest = (pos < bytes.len()).then_some(pos);

    Scan { value: Int256::new(magnitude, negative), digits, overflow, rest }
}

/// Parse `text` leniently.
///
/// Never fails: trailing garbage raises
/// [`Diagnostic::TrailingCharacters`] and a magnitude wider than 256 bits
/// raises [`Diagnostic::InputOverflow`] (the value is truncated modulo
/// `2^256`). Text without digits parses as zero.
///
/// ```
/// use int256::{parse, Diagnostic, Int256};
///
/// assert_eq!(parse("-0x1F").into_value(), Int256::from(-31));
/// let outcome = parse("12abc");
/// assert_eq!(outcome.value(), &Int256::from(12));
/// assert_eq!(
///     outcome.diagnostic(),
///     Some(Diagnostic::TrailingCharacters { position: 2 })
/// );
/// ```
pub fn parse(text: &str) -> Outcome<Int256> {
    scan(text).into_outcome()
}

impl Int256 {
    /// Parse `text` leniently. See [`parse`](crate::parse).
    pub fn parse(text: &str) -> Outcome<Self> {
        parse(text)
    }
}

impl FromStr for Int256 {
    type Err = Diagnostic;

    /// Strict parse: anything [`parse`] would flag is an error, and so is
    /// text without digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scan = scan(s);
        if scan.digits == 0 {
            return Err(Diagnostic::NoDigits);
        }
        scan.into_outcome().into_result()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    const MAX_DECIMAL: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[test]
    fn parses_decimal_with_sign() {
        assert_eq!(parse("100").into_value(), Int256::from(100u8));
        assert_eq!(parse("-30").into_value(), Int256::from(-30i8));
        assert_eq!(parse("+7").into_value(), Int256::from(7u8));
    }

    #[test]
    fn parses_base_prefixes() {
        assert_eq!(
            parse("0xFFFFFFFFFFFFFFFF").into_value(),
            Int256::from(u64::MAX)
        );
        assert_eq!(parse("0Xff").into_value(), Int256::from(255u8));
        assert_eq!(parse("0b101").into_value(), Int256::from(5u8));
        assert_eq!(parse("-0B11").into_value(), Int256::from(-3i8));
    }

    #[test]
    fn skips_surrounding_whitespace() {
        let outcome = parse("  \t42 \n");
        assert!(outcome.is_clean());
        assert_eq!(outcome.into_value(), Int256::from(42u8));
    }

    #[test]
    fn trailing_garbage_keeps_prefix_value() {
        let outcome = parse("12abc");
        assert_eq!(outcome.value(), &Int256::from(12u8));
        assert_eq!(
            outcome.diagnostic(),
            Some(Diagnostic::TrailingCharacters { position: 2 })
        );

        let outcome = parse("0b102");
        assert_eq!(outcome.value(), &Int256::from(2u8));
        assert_eq!(
            outcome.diagnostic(),
            Some(Diagnostic::TrailingCharacters { position: 4 })
        );

        let outcome = parse("- 5");
        assert_eq!(outcome.value(), &Int256::ZERO);
        assert_eq!(
            outcome.diagnostic(),
            Some(Diagnostic::TrailingCharacters { position: 2 })
        );
    }

    #[test]
    fn minus_zero_is_positive_zero() {
        let zero = parse("-0").into_value();
        assert_eq!(zero, Int256::ZERO);
        assert!(!zero.is_negative());
        assert!(!parse("-0x000").into_value().is_negative());
    }

    #[test]
    fn text_without_digits_is_zero() {
        assert_eq!(parse(""), Outcome::clean(Int256::ZERO));
        assert_eq!(parse("0x"), Outcome::clean(Int256::ZERO));
        assert_eq!(parse("-"), Outcome::clean(Int256::ZERO));
    }

    #[test]
    fn full_width_decimal_is_exact() {
        let outcome = parse(MAX_DECIMAL);
        assert!(outcome.is_clean());
        assert_eq!(outcome.into_value(), Int256::MAX);
    }

    #[test]
    fn overflowing_input_is_truncated_and_flagged() {
        // 2^256 wraps to zero.
        let outcome = parse("115792089237316195423570985008687907853269984665640564039457584007913129639936");
        assert_eq!(outcome.value(), &Int256::ZERO);
        assert_eq!(outcome.diagnostic(), Some(Diagnostic::InputOverflow));

        // 2^256 + 5 keeps the low bits.
        let hex = "0x10000000000000000000000000000000000000000000000000000000000000005";
        let outcome = parse(hex);
        assert_eq!(outcome.value(), &Int256::from(5u8));
        assert_eq!(outcome.diagnostic(), Some(Diagnostic::InputOverflow));
    }

    #[test]
    fn trailing_characters_win_over_overflow() {
        let text = format!("0x1{}5zz", "0".repeat(63));
        let outcome = parse(&text);
        assert_eq!(outcome.value(), &Int256::from(5u8));
        assert_eq!(
            outcome.diagnostic(),
            Some(Diagnostic::TrailingCharacters { position: 67 })
        );
        assert_eq!(
            text.parse::<Int256>(),
            Err(Diagnostic::TrailingCharacters { position: 67 })
        );
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("-30".parse::<Int256>(), Ok(Int256::from(-30i8)));
        assert_eq!(" 0b1 ".parse::<Int256>(), Ok(Int256::ONE));
        assert_eq!("".parse::<Int256>(), Err(Diagnostic::NoDigits));
        assert_eq!("0x".parse::<Int256>(), Err(Diagnostic::NoDigits));
        assert_eq!(
            "12abc".parse::<Int256>(),
            Err(Diagnostic::TrailingCharacters { position: 2 })
        );
        assert_eq!(
            "0x1_0000000000000000000000000000000000000000000000000000000000000000"
                .replace('_', "")
                .parse::<Int256>(),
            Err(Diagnostic::InputOverflow)
        );
    }
}
