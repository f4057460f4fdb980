use core::cmp::Ordering;

use crate::{Diagnostic, Int256, Outcome};

impl Int256 {
    /// Truncating division and remainder from a single long-division pass.
    ///
    /// The quotient's sign is the XOR of the operand signs; the remainder
    /// takes the dividend's sign. Zero results are always positive.
    /// Dividing by zero raises [`Diagnostic::DivisionByZero`] and yields
    /// `(0, 0)`.
    pub fn div_rem(&self, rhs: &Self) -> Outcome<(Self, Self)> {
        // Never taken for a zero divisor: no magnitude is below zero.
        if self.compare_magnitude(rhs) == Ordering::Less {
            return Outcome::clean((Self::ZERO, *self));
        }

        let Some((quotient, remainder)) =
            self.magnitude().checked_div_rem(&rhs.magnitude())
        else {
            return Outcome::flagged(
                (Self::ZERO, Self::ZERO),
                Diagnostic::DivisionByZero,
            );
        };

        Outcome::clean((
            Self::new(quotient, self.is_negative() ^ rhs.is_negative()),
            Self::new(remainder, self.is_negative()),
        ))
    }

    /// Truncating division, rounding toward zero.
    ///
    /// Dividing by zero raises [`Diagnostic::DivisionByZero`] and yields
    /// zero.
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let q = Int256::from(-7).div(&Int256::from(2)).into_value();
    /// assert_eq!(q.to_string(), "-3");
    /// ```
    pub fn div(&self, rhs: &Self) -> Outcome<Self> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division; carries the dividend's sign.
    ///
    /// Dividing by zero raises [`Diagnostic::DivisionByZero`] and yields
    /// zero.
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let r = Int256::from(-7).modulo(&Int256::from(2)).into_value();
    /// assert_eq!(r.to_string(), "-1");
    /// ```
    pub fn modulo(&self, rhs: &Self) -> Outcome<Self> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}
