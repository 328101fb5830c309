//! Big unsigned integers.

#![allow(clippy::needless_range_loop, clippy::many_single_char_names)]

#[macro_use]
mod concat;

mod add;
mod cmp;
mod encoding;
mod from;
pub(crate) mod mul;
mod resize;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Bounded, Limb, Word, Zero};
use core::fmt;
use subtle::{Choice, ConditionallySelectable};

/// Fixed-width unsigned integer.
///
/// Generic over the given number of `LIMBS`. Limbs are stored from least
/// significant to most significant, and the represented value is
/// `Σ limbs[i] * 2^(32 * i)`. The width is fixed by the type and never
/// changes; leading zero limbs are part of the value, never trimmed.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Uint<const LIMBS: usize> {
    /// Inner limb array. Stored from least significant to most significant.
    pub(crate) limbs: [Limb; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self::from_u8(0);

    /// The value `1`.
    pub const ONE: Self = Self::from_u8(1);

    /// Maximum value this [`Uint`] can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = LIMBS as u32 * Limb::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = LIMBS * Limb::BYTES;

    /// The number of limbs used on this platform.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly [`Uint`] constructor.
    pub const fn new(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`Uint`] from an array of [`Word`]s (i.e. 32-bit unsigned
    /// integers), least significant first.
    #[inline]
    pub const fn from_words(arr: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(arr[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of [`Word`]s (i.e. 32-bit unsigned integers) from
    /// a [`Uint`], least significant first.
    #[inline]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut arr = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            arr[i] = self.limbs[i].0;
            i += 1;
        }

        arr
    }

    /// Borrow the limbs of this [`Uint`].
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`Uint`] mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb; LIMBS] {
        &mut self.limbs
    }

    /// Convert this [`Uint`] into its inner limbs.
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.limbs
    }

    /// Get the word at the given index, least significant first.
    ///
    /// # Panics
    /// - if `index >= LIMBS`
    pub const fn word(&self, index: usize) -> Word {
        self.limbs[index].0
    }

    /// Returns `true` if every limb of `self` is zero.
    ///
    /// Variable-time with respect to `self`.
    pub const fn is_zero_vartime(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.limbs[i].0 != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl<const LIMBS: usize> AsRef<[Limb]> for Uint<LIMBS> {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl<const LIMBS: usize> AsMut<[Limb]> for Uint<LIMBS> {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> Bounded for Uint<LIMBS> {
    const BITS: u32 = Self::BITS;
    const BYTES: usize = Self::BYTES;
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> Zero for Uint<LIMBS> {
    const ZERO: Self = Self::ZERO;
}

impl<const LIMBS: usize> num_traits::Zero for Uint<LIMBS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self).into()
    }
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08x}", limb.0)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:08X}", limb.0)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::DefaultIsZeroes for Uint<LIMBS> {}

/// 64-bit unsigned integer.
pub type U64 = Uint<2>;

/// 128-bit unsigned integer.
pub type U128 = Uint<4>;

/// 256-bit unsigned integer: the operand width of the wide multiplier.
pub type U256 = Uint<8>;

/// 512-bit unsigned integer: the product width of the wide multiplier.
pub type U512 = Uint<16>;

impl_concat! {
    (U64, 2),
    (U128, 4),
    (U256, 8),
}

#[cfg(test)]
mod tests {
    use crate::{U128, U256, U512, Zero};
    use std::format;

    #[test]
    fn from_words_roundtrip() {
        let words = [1, 2, 3, 4, 5, 6, 7, 8];
        let n = U256::from_words(words);
        assert_eq!(n.to_words(), words);
        assert_eq!(n.word(0), 1);
        assert_eq!(n.word(7), 8);
    }

    #[test]
    fn widths() {
        assert_eq!(U256::BITS, 256);
        assert_eq!(U256::LIMBS, 8);
        assert_eq!(U512::BITS, 512);
        assert_eq!(U512::LIMBS, 16);
        assert_eq!(U512::BYTES, 64);
    }

    #[test]
    fn zero() {
        assert!(bool::from(U256::ZERO.is_zero()));
        assert!(!bool::from(U256::ONE.is_zero()));
        assert!(U512::ZERO.is_zero_vartime());
        assert!(!U512::MAX.is_zero_vartime());
        assert_eq!(U256::default(), U256::ZERO);
    }

    #[test]
    fn debug() {
        let n = U128::from_be_hex("AAAAAAAABBBBBBBBCCCCCCCCDDDDDDDD");
        assert_eq!(
            format!("{n:?}"),
            "Uint(0xAAAAAAAABBBBBBBBCCCCCCCCDDDDDDDD)"
        );
    }

    #[test]
    fn display() {
        let hex = "AAAAAAAABBBBBBBBCCCCCCCCDDDDDDDD";
        let n = U128::from_be_hex(hex);
        assert_eq!(format!("{n}"), hex);
        assert_eq!(format!("{n:x}"), hex.to_lowercase());
        assert_eq!(format!("{n:#X}"), format!("0x{hex}"));
    }
}
