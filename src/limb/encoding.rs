//! Limb encoding

use super::{Limb, Word};

impl Limb {
    /// Decode a limb from its big endian byte representation.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_be_bytes(bytes))
    }

    /// Decode a limb from its little endian byte representation.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; Limb::BYTES]) -> Self {
        Limb(Word::from_le_bytes(bytes))
    }

    /// Encode this limb as big endian bytes.
    #[inline]
    pub const fn to_be_bytes(&self) -> [u8; Limb::BYTES] {
        self.0.to_be_bytes()
    }

    /// Encode this limb as little endian bytes.
    #[inline]
    pub const fn to_le_bytes(&self) -> [u8; Limb::BYTES] {
        self.0.to_le_bytes()
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u16> for Limb {
    #[inline]
    fn from(n: u16) -> Limb {
        Limb(n.into())
    }
}

impl From<u32> for Limb {
    #[inline]
    fn from(n: u32) -> Limb {
        Limb(n)
    }
}

impl From<Limb> for u64 {
    #[inline]
    fn from(limb: Limb) -> u64 {
        limb.0.into()
    }
}
