//! The signed 256-bit value type.

use core::cmp::Ordering;

use zeroize::Zeroize;

use crate::arithmetic::{Limbs, Uint256, LIMBS};

/// Exact 256-bit sign-magnitude integer.
///
/// Holds a 256-bit unsigned magnitude and a separate sign flag, so the range
/// is symmetric: `-(2^256 - 1)..=2^256 - 1`. Zero is always positive; every
/// constructor and every operation restores that invariant, so derived
/// equality and hashing are exact.
///
/// Values are immutable and `Copy`; each operation returns a new value.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct Int256 {
    magnitude: Uint256,
    negative: bool,
}

impl Int256 {
    /// The largest value, `2^256 - 1`.
    pub const MAX: Self = Self::new(Uint256::MAX, false);
    /// The smallest value, `-(2^256 - 1)`.
    pub const MIN: Self = Self::new(Uint256::MAX, true);
    /// The value one.
    pub const ONE: Self = Self::new(Uint256::ONE, false);
    /// The value zero.
    pub const ZERO: Self = Self::new(Uint256::ZERO, false);

    /// Create a value from a magnitude and a sign flag.
    ///
    /// A zero magnitude always yields positive zero, whatever `negative`
    /// says.
    #[must_use]
    pub const fn new(magnitude: Uint256, negative: bool) -> Self {
        Self { magnitude, negative: negative && !magnitude.ct_is_zero() }
    }

    /// Create a value from limbs ordered most significant first.
    #[must_use]
    pub const fn from_limbs(limbs: Limbs<LIMBS>, negative: bool) -> Self {
        Self::new(Uint256::new(limbs), negative)
    }

    /// The unsigned magnitude.
    #[must_use]
    pub const fn magnitude(&self) -> Uint256 {
        self.magnitude
    }

    /// The magnitude's limbs, most significant first.
    #[must_use]
    pub const fn limbs(&self) -> &Limbs<LIMBS> {
        self.magnitude.as_limbs()
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.magnitude.ct_is_zero()
    }

    /// Flip the sign. Zero stays zero.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self::new(self.magnitude, !self.negative)
    }

    /// Drop the sign.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self::new(self.magnitude, false)
    }

    /// Compare magnitudes, ignoring signs.
    #[must_use]
    pub const fn compare_magnitude(&self, rhs: &Self) -> Ordering {
        self.magnitude.ct_cmp(&rhs.magnitude)
    }

    /// Signed comparison.
    ///
    /// Differing signs order by sign. Equal signs order by magnitude, with
    /// the order reversed for negative values.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use int256::Int256;
    ///
    /// let a = Int256::parse("100").into_value();
    /// let b = Int256::parse("99").into_value();
    /// assert_eq!(a.compare(&b), Ordering::Greater);
    /// assert_eq!(a.negate().compare(&b.negate()), Ordering::Less);
    /// ```
    #[must_use]
    pub const fn compare(&self, rhs: &Self) -> Ordering {
        match (self.negative, rhs.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_magnitude(rhs),
            (true, true) => rhs.compare_magnitude(self),
        }
    }
}

impl Ord for Int256 {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.compare(rhs)
    }
}

impl PartialOrd for Int256 {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl From<Uint256> for Int256 {
    fn from(magnitude: Uint256) -> Self {
        Self::new(magnitude, false)
    }
}

macro_rules! impl_from_unsigned {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Int256 {
                #[inline]
                fn from(val: $int) -> Self {
                    Self::new(Uint256::from(val), false)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

macro_rules! impl_from_signed {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Int256 {
                #[inline]
                fn from(val: $int) -> Self {
                    Self::new(Uint256::from(val.unsigned_abs()), val < 0)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128);

impl From<Int256> for num_bigint::BigInt {
    fn from(val: Int256) -> num_bigint::BigInt {
        let sign = if val.negative {
            num_bigint::Sign::Minus
        } else {
            num_bigint::Sign::Plus
        };
        num_bigint::BigInt::from_biguint(sign, val.magnitude.into())
    }
}
