//! Bit manipulation utilities.

/// Iterates over bits in big-endian order.
pub trait BitIteratorBE {
    /// Returns an iterator over the bits of the integer, starting from the most
    /// significant bit.
    fn bit_be_iter(&self) -> impl Iterator<Item = bool>;
}

macro_rules! impl_bit_iter_be {
    ($int:ty, $bits:expr) => {
        impl BitIteratorBE for $int {
            fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
                (0..$bits).rev().map(move |i| self & (1 << i) != 0)
            }
        }
    };
}

impl_bit_iter_be!(u64, 64);

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn u64_bit_iterator_be_keeps_leading_zeroes() {
        let num: u64 = 1;
        let bits: Vec<bool> = num.bit_be_iter().collect();

        assert_eq!(bits.len(), 64);
        assert!(bits[63]);
        assert!(bits[..63].iter().all(|&b| !b));
    }
}
