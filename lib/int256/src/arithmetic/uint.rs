//! This module contains [`Uint256`], the unsigned 256-bit magnitude behind
//! [`Int256`](crate::Int256), and [`WideUint`], the 512-bit double-width
//! scratch space used by multiplication and decimal rendering.
//!
//! Limbs are stored most-significant-first. Carry and borrow chains therefore
//! walk the limb array from its last index to its first.

use core::{
    borrow::Borrow,
    cmp::Ordering,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
    },
};

use num_traits::ConstZero;
use zeroize::Zeroize;

use crate::{
    arithmetic::limb::{self, Limb, Limbs},
    bits::BitIteratorBE,
    ct_for, ct_for_rev,
};

/// Number of [`Limb`]s in a [`Uint256`].
pub const LIMBS: usize = 4;

/// Stack-allocated 256-bit unsigned integer.
///
/// `limbs[0]` holds bits `192..256`, `limbs[3]` holds bits `0..64`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct Uint256 {
    pub(crate) limbs: Limbs<LIMBS>,
}

impl Uint256 {
    /// Number of bits in the magnitude.
    pub const BITS: usize = LIMBS * Limb::BITS as usize;
    /// The largest magnitude, `2^256 - 1`.
    pub const MAX: Self = Self { limbs: [Limb::MAX; LIMBS] };
    /// The magnitude one.
    pub const ONE: Self = Self::from_u64(1);
    /// The magnitude zero.
    pub const ZERO: Self = Self { limbs: [Limb::ZERO; LIMBS] };

    /// Create a new [`Uint256`] from `limbs`, most significant first.
    #[must_use]
    pub const fn new(limbs: Limbs<LIMBS>) -> Self {
        Self { limbs }
    }

    /// Returns reference to the inner limbs, most significant first.
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<LIMBS> {
        &self.limbs
    }

    /// Create a [`Uint256`] from a `u64` (constant).
    #[must_use]
    pub const fn from_u64(val: u64) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[LIMBS - 1] = val;
        Self { limbs }
    }

    /// Create a [`Uint256`] from a `u128` (constant).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u128(val: u128) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[LIMBS - 1] = val as Limb;
        limbs[LIMBS - 2] = (val >> Limb::BITS) as Limb;
        Self { limbs }
    }

    /// Create a [`Uint256`] from 32 big-endian bytes (constant).
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        const LIMB_BYTES: usize = Limb::BITS as usize / 8;

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut buf = [0u8; LIMB_BYTES];
        ct_for!((i in 0..LIMBS) {
            ct_for!((j in 0..LIMB_BYTES) {
                buf[j] = bytes[i * LIMB_BYTES + j];
            });
            limbs[i] = Limb::from_be_bytes(buf);
        });

        Self { limbs }
    }

    /// Convert into 32 big-endian bytes (constant).
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; 32] {
        const LIMB_BYTES: usize = Limb::BITS as usize / 8;

        let mut bytes = [0u8; 32];
        ct_for!((i in 0..LIMBS) {
            let buf = self.limbs[i].to_be_bytes();
            ct_for!((j in 0..LIMB_BYTES) {
                bytes[i * LIMB_BYTES + j] = buf[j];
            });
        });

        bytes
    }

    /// Checks `self` is zero (constant).
    #[must_use]
    pub const fn ct_is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO)
    }

    /// Checks if `self` is equal to `rhs` (constant).
    #[must_use]
    pub const fn ct_eq(&self, rhs: &Self) -> bool {
        ct_for!((i in 0..LIMBS) {
            if self.limbs[i] != rhs.limbs[i] {
                return false;
            }
        });
        true
    }

    /// Compare magnitudes limb by limb, starting from the most significant
    /// one (constant).
    #[must_use]
    pub const fn ct_cmp(&self, rhs: &Self) -> Ordering {
        ct_for!((i in 0..LIMBS) {
            let a = self.limbs[i];
            let b = rhs.limbs[i];
            if a > b {
                return Ordering::Greater;
            } else if a < b {
                return Ordering::Less;
            }
        });
        Ordering::Equal
    }

    /// Checks `self` is greater than or equal to `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn ct_ge(&self, rhs: &Self) -> bool {
        !matches!(self.ct_cmp(rhs), Ordering::Less)
    }

    /// Add `rhs` to `self`, returning the result and whether a carry left the
    /// most significant limb (constant).
    #[inline]
    #[must_use]
    pub const fn ct_checked_add(mut self, rhs: &Self) -> (Self, bool) {
        let mut carry = 0;

        ct_for_rev!((i in 0..LIMBS) {
            (self.limbs[i], carry) = limb::adc(self.limbs[i], rhs.limbs[i], carry);
        });

        (self, carry != 0)
    }

    /// Subtract `rhs` from `self`, returning the result and whether the
    /// subtraction underflowed (constant).
    #[inline]
    #[must_use]
    pub const fn ct_checked_sub(mut self, rhs: &Self) -> (Self, bool) {
        let mut borrow = 0;

        ct_for_rev!((i in 0..LIMBS) {
            (self.limbs[i], borrow) = limb::sbb(self.limbs[i], rhs.limbs[i], borrow);
        });

        (self, borrow != 0)
    }

    /// Compute "wide" multiplication, with a product twice the size of the
    /// input.
    ///
    /// Schoolbook algorithm: the partial product of the limbs with
    /// significance `i` and `j` lands at significance `i + j` of an 8-limb
    /// accumulator, and each row ripples its carry upward before the next
    /// row starts.
    #[must_use]
    pub const fn ct_widening_mul(&self, rhs: &Self) -> WideUint {
        // Indexed by significance: `acc[0]` is the least significant limb.
        let mut acc = [Limb::ZERO; 2 * LIMBS];

        ct_for!((i in 0..LIMBS) {
            let a = self.limbs[LIMBS - 1 - i];
            let mut carry = 0;
            ct_for!((j in 0..LIMBS) {
                let b = rhs.limbs[LIMBS - 1 - j];
                (acc[i + j], carry) = limb::carrying_mac(acc[i + j], a, b, carry);
            });
            acc[i + LIMBS] = carry;
        });

        let mut low = [Limb::ZERO; LIMBS];
        let mut high = [Limb::ZERO; LIMBS];
        ct_for!((i in 0..LIMBS) {
            low[LIMBS - 1 - i] = acc[i];
            high[LIMBS - 1 - i] = acc[i + LIMBS];
        });

        WideUint::new(Self::new(low), Self::new(high))
    }

    /// Compute `self * multiplier + addend`, returning the low 256 bits and
    /// the limb carried out of the most significant position (constant).
    #[must_use]
    pub const fn ct_mul_limb_add(
        mut self,
        multiplier: Limb,
        addend: Limb,
    ) -> (Self, Limb) {
        let mut carry = addend;

        ct_for_rev!((i in 0..LIMBS) {
            (self.limbs[i], carry) = limb::mac(carry, self.limbs[i], multiplier);
        });

        (self, carry)
    }

    /// Shift `self` left by one bit, filling the freed lowest bit with
    /// `bit_in`. Returns the result and the bit shifted out of the top
    /// (constant).
    #[must_use]
    pub const fn ct_shl1(mut self, bit_in: bool) -> (Self, bool) {
        let mut last = bit_in as Limb;

        ct_for_rev!((i in 0..LIMBS) {
            let a = self.limbs[i];
            let tmp = a >> 63;
            self.limbs[i] = (a << 1) | last;
            last = tmp;
        });

        (self, last != 0)
    }

    /// Logical shift left by `bits`, dropping whatever leaves the top
    /// (constant).
    ///
    /// Shifting by [`Self::BITS`] or more yields zero.
    #[must_use]
    pub const fn ct_shl(&self, bits: u32) -> Self {
        if bits as usize >= Self::BITS {
            return Self::ZERO;
        }

        let word_shift = (bits / Limb::BITS) as usize;
        let bit_shift = bits % Limb::BITS;
        let mut limbs = [Limb::ZERO; LIMBS];

        ct_for!((i in 0..LIMBS) {
            let src = i + word_shift;
            if src < LIMBS {
                let mut value = self.limbs[src] << bit_shift;
                // Bits carried in from the less significant neighbour.
                if bit_shift != 0 && src + 1 < LIMBS {
                    value |= self.limbs[src + 1] >> (Limb::BITS - bit_shift);
                }
                limbs[i] = value;
            }
        });

        Self { limbs }
    }

    /// Logical shift right by `bits` (constant).
    ///
    /// Shifting by [`Self::BITS`] or more yields zero.
    #[must_use]
    pub const fn ct_shr(&self, bits: u32) -> Self {
        if bits as usize >= Self::BITS {
            return Self::ZERO;
        }

        let word_shift = (bits / Limb::BITS) as usize;
        let bit_shift = bits % Limb::BITS;
        let mut limbs = [Limb::ZERO; LIMBS];

        ct_for!((i in word_shift..LIMBS) {
            let src = i - word_shift;
            let mut value = self.limbs[src] >> bit_shift;
            // Bits carried in from the more significant neighbour.
            if bit_shift != 0 && src > 0 {
                value |= self.limbs[src - 1] << (Limb::BITS - bit_shift);
            }
            limbs[i] = value;
        });

        Self { limbs }
    }

    /// Widen `self` into the low half of a [`WideUint`] (constant).
    #[must_use]
    pub const fn to_wide(&self) -> WideUint {
        WideUint::new(*self, Self::ZERO)
    }

    /// Divide `self` by `rhs`, returning `(quotient, remainder)`, or `None`
    /// when `rhs` is zero.
    ///
    /// Restoring binary long division: for each of the 256 bits of `self`,
    /// from the most significant one, the running remainder is shifted left
    /// taking in that bit, the quotient is shifted left, and whenever the
    /// remainder reaches `rhs` it is reduced and the quotient's low bit set.
    #[must_use]
    pub fn checked_div_rem(&self, rhs: &Self) -> Option<(Self, Self)> {
        if rhs.ct_is_zero() {
            return None;
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        for bit in self.bit_be_iter() {
            let (shifted, carry) = remainder.ct_shl1(bit);
            (quotient, _) = quotient.ct_shl1(false);

            // A carry out of the remainder means it is above 2^256, which is
            // certainly not less than `rhs`.
            if carry || shifted.ct_ge(rhs) {
                (remainder, _) = shifted.ct_checked_sub(rhs);
                quotient.limbs[LIMBS - 1] |= 1;
            } else {
                remainder = shifted;
            }
        }

        Some((quotient, remainder))
    }
}

// ----------- From Impls -----------

/// From traits implementation for primitives.
macro_rules! impl_from_primitive {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Uint256 {
                #[inline]
                fn from(val: $int) -> Uint256 {
                    Uint256::from_u64(u64::from(val))
                }
            }
        )*
    };
}

impl_from_primitive!(u8, u16, u32, u64);

impl From<u128> for Uint256 {
    #[inline]
    fn from(val: u128) -> Uint256 {
        Uint256::from_u128(val)
    }
}

impl From<Uint256> for num_bigint::BigUint {
    fn from(val: Uint256) -> num_bigint::BigUint {
        num_bigint::BigUint::from_bytes_be(&val.to_be_bytes())
    }
}

// ----------- Traits Impls -----------

impl Ord for Uint256 {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.ct_cmp(rhs)
    }
}

impl PartialOrd for Uint256 {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<B: Borrow<Self>> BitXorAssign<B> for Uint256 {
    fn bitxor_assign(&mut self, rhs: B) {
        for i in 0..LIMBS {
            self.limbs[i] ^= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>> BitXor<B> for Uint256 {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<B: Borrow<Self>> BitAndAssign<B> for Uint256 {
    fn bitand_assign(&mut self, rhs: B) {
        for i in 0..LIMBS {
            self.limbs[i] &= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>> BitAnd<B> for Uint256 {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>> BitOrAssign<B> for Uint256 {
    fn bitor_assign(&mut self, rhs: B) {
        for i in 0..LIMBS {
            self.limbs[i] |= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>> BitOr<B> for Uint256 {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitIteratorBE for Uint256 {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.as_limbs().iter().flat_map(Limb::bit_be_iter)
    }
}

/// Integer with twice the limbs of [`Uint256`].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct WideUint {
    low: Uint256,
    high: Uint256,
}

impl WideUint {
    /// Construct new [`WideUint`] from `low` and `high` parts.
    #[must_use]
    pub const fn new(low: Uint256, high: Uint256) -> Self {
        Self { low, high }
    }

    /// The least significant 256 bits.
    #[must_use]
    pub const fn low(&self) -> Uint256 {
        self.low
    }

    /// The most significant 256 bits.
    #[must_use]
    pub const fn high(&self) -> Uint256 {
        self.high
    }

    /// Checks `self` is zero (constant).
    #[must_use]
    pub const fn ct_is_zero(&self) -> bool {
        self.low.ct_is_zero() && self.high.ct_is_zero()
    }

    /// Divide `self` by a single limb, returning the quotient and the
    /// remainder (constant).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub const fn ct_div_rem_limb(&self, divisor: Limb) -> (Self, Limb) {
        assert!(divisor != 0, "should not divide by zero");

        let mut high = self.high;
        let mut low = self.low;
        let mut rem = Limb::ZERO;

        ct_for!((i in 0..LIMBS) {
            (high.limbs[i], rem) = limb::div_rem_wide(rem, high.limbs[i], divisor);
        });
        ct_for!((i in 0..LIMBS) {
            (low.limbs[i], rem) = limb::div_rem_wide(rem, low.limbs[i], divisor);
        });

        (Self::new(low, high), rem)
    }
}
