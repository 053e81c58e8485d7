//! Fixed-width multi-limb integer arithmetic.
//!
//! The kernel is a flat little-endian array of [`limb::Limb`] machine words.
//! [`uint::Uint`] is the unsigned value type together with the carry, shift,
//! multiplication and long-division routines; [`int::Int`] is the
//! two's-complement signed overlay on top of it.

pub mod int;
pub mod limb;
pub mod uint;

pub use limb::{Limb, Limbs, WideLimb};
