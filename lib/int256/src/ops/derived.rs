//! Operations built from repeated multiplication.

use num_traits::Pow;

use crate::{Diagnostic, Int256, Outcome};

impl Int256 {
    /// Raise `self` to `exp` by square-and-multiply.
    ///
    /// `x^0` is one for every `x`, zero included. Overflow is reported by the
    /// underlying multiplications; the base is only squared while exponent
    /// bits remain, so a square that is never used cannot raise a diagnostic.
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let cube = Int256::from(-2).pow(3).into_value();
    /// assert_eq!(cube, Int256::from(-8));
    /// ```
    pub fn pow(&self, exp: u32) -> Outcome<Self> {
        let mut state = Outcome::clean((Self::ONE, *self));
        let mut exp = exp;

        while exp > 0 {
            let multiply = exp & 1 == 1;
            exp >>= 1;
            let square = exp > 0;

            state = state.and_then(|(acc, base)| {
                let acc = if multiply {
                    acc.mul(&base)
                } else {
                    Outcome::clean(acc)
                };
                acc.and_then(|acc| {
                    if square {
                        base.mul(&base).map(|base| (acc, base))
                    } else {
                        Outcome::clean((acc, base))
                    }
                })
            });
        }

        state.map(|(acc, _)| acc)
    }

    /// `n!`, multiplying `2 * 3 * ... * n` in order.
    ///
    /// Past 57 the product no longer fits and each step raises
    /// [`Diagnostic::MultiplicationOverflow`]. Once the truncated product
    /// becomes zero (first at 258, when the factor two has filled all 256
    /// bits) the loop stops and [`Diagnostic::FactorialOverflow`] replaces
    /// any earlier diagnostic; the value is zero.
    ///
    /// ```
    /// use int256::{Diagnostic, Int256};
    ///
    /// assert_eq!(Int256::factorial(5).into_value(), Int256::from(120));
    ///
    /// let wrapped = Int256::factorial(300);
    /// assert_eq!(wrapped.diagnostic(), Some(Diagnostic::FactorialOverflow { at: 258 }));
    /// ```
    pub fn factorial(n: u32) -> Outcome<Self> {
        let mut product = Outcome::clean(Self::ONE);
        for i in 2..=n {
            product = product.and_then(|acc| acc.mul(&Self::from(i)));
            if product.value().is_zero() {
                return Outcome::flagged(
                    Self::ZERO,
                    Diagnostic::FactorialOverflow { at: i },
                );
            }
        }
        product
    }
}

impl Pow<u32> for Int256 {
    type Output = Outcome<Int256>;

    fn pow(self, rhs: u32) -> Self::Output {
        Int256::pow(&self, rhs)
    }
}
