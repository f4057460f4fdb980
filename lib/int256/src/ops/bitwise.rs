//! Bitwise operators and logical shifts.
//!
//! AND, OR and XOR act on the magnitudes limb by limb, and combine the two
//! sign flags with the same operator, as if the sign were a one-bit field.
//! `-5 & -3` is therefore `-1`, and `-5 ^ -3` is `6`. A zero result is
//! positive regardless.

use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

use crate::Int256;

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Int256 {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(
                    self.magnitude() $op rhs.magnitude(),
                    self.is_negative() $op rhs.is_negative(),
                )
            }
        }

        impl $trait<&Int256> for Int256 {
            type Output = Self;

            fn $method(self, rhs: &Int256) -> Self::Output {
                self $op *rhs
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, &);
impl_bitwise!(BitOr, bitor, |);
impl_bitwise!(BitXor, bitxor, ^);

impl Int256 {
    /// Logical shift of the magnitude toward the most significant bit. Bits
    /// shifted past bit 255 are lost; the sign is kept.
    ///
    /// Counts of 256 or more yield zero.
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let top = Int256::ONE.shift_left(255);
    /// assert_eq!(
    ///     top.to_hex_string(),
    ///     "0x8000000000000000000000000000000000000000000000000000000000000000"
    /// );
    /// ```
    #[must_use]
    pub const fn shift_left(&self, bits: u32) -> Self {
        Self::new(self.magnitude().ct_shl(bits), self.is_negative())
    }

    /// Logical shift of the magnitude toward the least significant bit,
    /// without sign extension; the sign is kept.
    ///
    /// Counts of 256 or more yield zero.
    #[must_use]
    pub const fn shift_right(&self, bits: u32) -> Self {
        Self::new(self.magnitude().ct_shr(bits), self.is_negative())
    }
}

impl Shl<u32> for Int256 {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl Shr<u32> for Int256 {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs)
    }
}
