use crate::{Diagnostic, Int256, Outcome};

impl Int256 {
    /// Signed multiplication.
    ///
    /// The full 512-bit product is formed by schoolbook multiplication; the
    /// low 256 bits are returned. Anything left in the high half raises
    /// [`Diagnostic::MultiplicationOverflow`].
    ///
    /// ```
    /// use int256::Int256;
    ///
    /// let a = Int256::parse("0xFFFFFFFFFFFFFFFF").into_value();
    /// let product = a.mul(&Int256::from(2)).into_value();
    /// assert_eq!(product.to_hex_string(), "0x1fffffffffffffffe");
    /// ```
    pub fn mul(&self, rhs: &Self) -> Outcome<Self> {
        let product = self.magnitude().ct_widening_mul(&rhs.magnitude());
        let value =
            Self::new(product.low(), self.is_negative() ^ rhs.is_negative());

        if product.high().ct_is_zero() {
            Outcome::clean(value)
        } else {
            Outcome::flagged(value, Diagnostic::MultiplicationOverflow)
        }
    }
}
