//! Fixed-width wide unsigned integer multiplication.
//!
//! # About
//! This library computes exact double-width products of fixed-width unsigned
//! integers, with the 256-bit × 256-bit → 512-bit case as its primary target.
//! It is designed for resource-constrained embedded and accelerator
//! platforms: no heap allocations, `no_std`, fixed-size arrays sized by const
//! generics, and the same 32-bit word representation on every target.
//!
//! Integers are [`Uint`]s: little-endian arrays of 32-bit [`Limb`]s. The
//! schoolbook multiplication forms every partial product in a 64-bit
//! [`WideWord`] and threads an explicit carry across the whole product, so
//! no carry is ever narrowed away. A carry escaping the product width is a
//! broken invariant and panics.
//!
//! # Usage
//! ```
//! use wide_mul::{U256, U512};
//!
//! let a = U256::from_u32(3);
//! let b = U256::from_u32(5);
//! let product: U512 = a.concatenating_mul(&b);
//! assert_eq!(product, U512::from_u32(15));
//! ```
//!
//! The [`multiplier`] module wraps the arithmetic in a [`WideMultiplier`]
//! which applies a configurable delay, dispatches to an execution backend and
//! reports a [`Status`](multiplier::Status).
//!
//! [`WideMultiplier`]: multiplier::WideMultiplier

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod limb;
mod primitives;
mod traits;
mod uint;
mod word;

pub mod multiplier;

pub use crate::{
    limb::Limb,
    traits::*,
    uint::*,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
