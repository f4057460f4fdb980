//! Single-limb arithmetic with explicit carries.

use num_traits::{ConstOne, ConstZero};

/// One 64-bit word of a magnitude.
pub type Limb = u64;
/// A fixed run of limbs, most significant first.
pub type Limbs<const N: usize> = [Limb; N];
/// Twice the width of a [`Limb`], holding products and carries.
pub type WideLimb = u128;

/// Multiply two [`Limb`]'s and return widened result.
#[inline(always)]
#[must_use]
pub const fn widening_mul(a: Limb, b: Limb) -> WideLimb {
    a as WideLimb * b as WideLimb
}

/// Calculate `a + b * c`, returning the lower 64 bits of the result and the
/// upper 64 bits as carry.
#[inline(always)]
#[must_use]
pub const fn mac(a: Limb, b: Limb, c: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let tmp = a + widening_mul(b, c);
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + (b * c) + carry`, returning the least significant digit
/// and the most significant digit as the new carry.
///
/// Cannot overflow: `(2^64 - 1) + (2^64 - 1)^2 + (2^64 - 1) = 2^128 - 1`.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(
    a: Limb,
    b: Limb,
    c: Limb,
    carry: Limb,
) -> (Limb, Limb) {
    let a = a as WideLimb;
    let carry = carry as WideLimb;
    let tmp = a + widening_mul(b, c) + carry;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + b + carry` and return the result and carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let b = b as WideLimb;
    let carry = carry as WideLimb;
    let tmp = a + b + carry;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a - b - borrow` and return the result and borrow.
///
/// Borrow is `1` iff the true wide subtraction underflows.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let b = b as WideLimb;
    let borrow = borrow as WideLimb;
    let tmp = (WideLimb::ONE << Limb::BITS) + a - b - borrow;
    let borrow = if tmp >> Limb::BITS == 0 { Limb::ONE } else { Limb::ZERO };
    (tmp as Limb, borrow)
}

/// Divide the two-limb value `hi:lo` by `divisor`, returning the quotient
/// limb and the remainder.
///
/// Requires `hi < divisor`, so the quotient fits a single [`Limb`].
#[inline(always)]
#[must_use]
pub const fn div_rem_wide(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
    let value = ((hi as WideLimb) << Limb::BITS) | lo as WideLimb;
    let divisor = divisor as WideLimb;
    ((value / divisor) as Limb, (value % divisor) as Limb)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn adc_carries_out_of_full_limb() {
        assert_eq!(adc(Limb::MAX, 1, 0), (0, 1));
        assert_eq!(adc(Limb::MAX, Limb::MAX, 1), (Limb::MAX, 1));
        assert_eq!(adc(2, 3, 1), (6, 0));
    }

    #[test]
    fn sbb_borrows_on_underflow() {
        assert_eq!(sbb(0, 1, 0), (Limb::MAX, 1));
        assert_eq!(sbb(5, 5, 0), (0, 0));
        assert_eq!(sbb(5, 5, 1), (Limb::MAX, 1));
        assert_eq!(sbb(7, 2, 1), (4, 0));
    }

    #[test]
    fn carrying_mac_saturates_exactly() {
        let (lo, hi) = carrying_mac(Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX);
        assert_eq!((lo, hi), (Limb::MAX, Limb::MAX));
    }

    #[test]
    fn check_mac_against_wide_arithmetic() {
        proptest!(|(a: Limb, b: Limb, c: Limb)| {
            let (lo, hi) = mac(a, b, c);
            let expected = a as WideLimb + b as WideLimb * c as WideLimb;
            prop_assert_eq!(((hi as WideLimb) << 64) | lo as WideLimb, expected);
        });
    }

    #[test]
    fn check_div_rem_wide() {
        proptest!(|(hi: Limb, lo: Limb, divisor in 1..=Limb::MAX)| {
            let hi = hi % divisor;
            let (q, r) = div_rem_wide(hi, lo, divisor);
            let value = ((hi as WideLimb) << 64) | lo as WideLimb;
            prop_assert_eq!(q as WideLimb * divisor as WideLimb + r as WideLimb, value);
            prop_assert!(r < divisor);
        });
    }
}
