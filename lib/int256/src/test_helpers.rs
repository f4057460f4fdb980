use proptest::prelude::*;

use crate::{arithmetic::uint::Uint256, Int256};

/// Magnitudes spread over every width, so that single-limb, multi-limb and
/// full-width values all show up.
pub(crate) fn uint256_strategy() -> impl Strategy<Value = Uint256> {
    (any::<[u64; 4]>(), 0u32..256).prop_map(|(limbs, shift)| {
        Uint256::new(limbs).ct_shr(shift)
    })
}

pub(crate) fn int256_strategy() -> impl Strategy<Value = Int256> {
    (uint256_strategy(), any::<bool>())
        .prop_map(|(magnitude, negative)| Int256::new(magnitude, negative))
}

/// Values whose magnitude fits in 127 bits, so that sums and products of
/// two of them never leave the 256-bit range.
pub(crate) fn small_int256_strategy() -> impl Strategy<Value = Int256> {
    (any::<u128>(), any::<bool>()).prop_map(|(magnitude, negative)| {
        Int256::new(Uint256::from(magnitude >> 1), negative)
    })
}
