//! Limb-level building blocks: the 64-bit [`Limb`] primitives and the
//! unsigned 256-bit magnitude [`Uint256`] the signed value is built on.

pub mod limb;
pub mod uint;

pub use limb::{Limb, Limbs, WideLimb};
pub use uint::{Uint256, WideUint, LIMBS};
