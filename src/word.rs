//! `Word` represents the core integer type we use as the core of `Limb`.
//!
//! Unlike a pointer-sized limb, the word width here is pinned to 32 bits on
//! every target so that results are bit-identical between the host and the
//! embedded platforms the multiplier is deployed to.

use subtle::Choice;

/// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u32;

/// Wide integer type: double the width of [`Word`].
pub type WideWord = u64;

/// Returns the truthy value if `value != 0`, and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_nz(value: Word) -> Choice {
    Choice::from(((value | value.wrapping_neg()) >> (Word::BITS - 1)) as u8)
}
