#![doc = include_str!("../README.md")]
#![warn(missing_docs, unreachable_pub, rust_2021_compatibility)]
#![warn(clippy::all, clippy::pedantic)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[macro_use]
mod const_helpers;

pub mod arithmetic;

pub use arithmetic::{
    int::{Int, I128, I256, I512},
    limb::{Limb, Limbs, WideLimb},
    uint::{Uint, WideUint, U128, U256, U512, U64},
};
