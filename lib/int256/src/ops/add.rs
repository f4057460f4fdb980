use core::ops::Neg;

use crate::{Diagnostic, Int256, Outcome};

impl Int256 {
    /// Signed addition.
    ///
    /// Equal signs add magnitudes; a carry out of the most significant limb
    /// raises [`Diagnostic::AdditionOverflow`] and the truncated sum is
    /// returned. Differing signs subtract the smaller magnitude from the
    /// larger, taking the sign of the larger, which cannot overflow.
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let sum = Int256::from(100).add(&Int256::from(-30));
    /// assert_eq!(sum.into_value().to_string(), "70");
    /// ```
    pub fn add(&self, rhs: &Self) -> Outcome<Self> {
        let (lhs_mag, rhs_mag) = (self.magnitude(), rhs.magnitude());

        if self.is_negative() == rhs.is_negative() {
            let (sum, carry) = lhs_mag.ct_checked_add(&rhs_mag);
            let sum = Self::new(sum, self.is_negative());
            return if carry {
                Outcome::flagged(sum, Diagnostic::AdditionOverflow)
            } else {
                Outcome::clean(sum)
            };
        }

        let difference = if lhs_mag.ct_ge(&rhs_mag) {
            Self::new(lhs_mag.ct_checked_sub(&rhs_mag).0, self.is_negative())
        } else {
            Self::new(rhs_mag.ct_checked_sub(&lhs_mag).0, rhs.is_negative())
        };
        Outcome::clean(difference)
    }

    /// Signed subtraction, `self + (-rhs)`.
    pub fn sub(&self, rhs: &Self) -> Outcome<Self> {
        self.add(&rhs.negate())
    }
}

impl Neg for Int256 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
