//! Const-friendly decoding/encoding operations for [`Uint`].

use super::Uint;
use crate::{Limb, Word};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Create a new [`Uint`] from the provided big endian bytes.
    ///
    /// # Panics
    /// - if the slice is not exactly [`Uint::BYTES`] long.
    pub const fn from_be_slice(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() == Limb::BYTES * LIMBS,
            "bytes are not the expected size"
        );

        let mut res = [Limb::ZERO; LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;

        while i < LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                buf[j] = bytes[i * Limb::BYTES + j];
                j += 1;
            }
            res[LIMBS - i - 1] = Limb(Word::from_be_bytes(buf));
            i += 1;
        }

        Uint::new(res)
    }

    /// Create a new [`Uint`] from the provided little endian bytes.
    ///
    /// # Panics
    /// - if the slice is not exactly [`Uint::BYTES`] long.
    pub const fn from_le_slice(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() == Limb::BYTES * LIMBS,
            "bytes are not the expected size"
        );

        let mut res = [Limb::ZERO; LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;

        while i < LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                buf[j] = bytes[i * Limb::BYTES + j];
                j += 1;
            }
            res[i] = Limb(Word::from_le_bytes(buf));
            i += 1;
        }

        Uint::new(res)
    }

    /// Create a new [`Uint`] from the provided big endian hex string.
    ///
    /// # Panics
    /// - if the hex is malformed or not zero-padded accordingly for the size.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();

        assert!(
            bytes.len() == Limb::BYTES * LIMBS * 2,
            "hex string is not the expected size"
        );

        let mut res = [Limb::ZERO; LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;
        let mut err = 0;

        while i < LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                let offset = (i * Limb::BYTES + j) * 2;
                let (result, byte_err) = decode_hex_byte([bytes[offset], bytes[offset + 1]]);
                err |= byte_err;
                buf[j] = result;
                j += 1;
            }
            res[LIMBS - i - 1] = Limb(Word::from_be_bytes(buf));
            i += 1;
        }

        assert!(err == 0, "invalid hex byte");

        Uint::new(res)
    }

    /// Serialize this [`Uint`] as big-endian, writing it into the provided
    /// byte slice.
    ///
    /// # Panics
    /// - if the slice is not exactly [`Uint::BYTES`] long.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Limb::BYTES * LIMBS, "output is not the expected size");

        for (src, dst) in self
            .limbs
            .iter()
            .rev()
            .zip(out.chunks_exact_mut(Limb::BYTES))
        {
            dst.copy_from_slice(&src.to_be_bytes());
        }
    }

    /// Serialize this [`Uint`] as little-endian, writing it into the provided
    /// byte slice.
    ///
    /// # Panics
    /// - if the slice is not exactly [`Uint::BYTES`] long.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), Limb::BYTES * LIMBS, "output is not the expected size");

        for (src, dst) in self.limbs.iter().zip(out.chunks_exact_mut(Limb::BYTES)) {
            dst.copy_from_slice(&src.to_le_bytes());
        }
    }
}

/// Decode a single nibble of upper or lower hex
#[inline(always)]
const fn decode_nibble(src: u8) -> u16 {
    let byte = src as i16;
    let mut ret: i16 = -1;

    // 0-9  0x30-0x39
    // if (byte > 0x2f && byte < 0x3a) ret += byte - 0x30 + 1; // -47
    ret += (((0x2fi16 - byte) & (byte - 0x3a)) >> 8) & (byte - 47);
    // A-F  0x41-0x46
    // if (byte > 0x40 && byte < 0x47) ret += byte - 0x41 + 10 + 1; // -54
    ret += (((0x40i16 - byte) & (byte - 0x47)) >> 8) & (byte - 54);
    // a-f  0x61-0x66
    // if (byte > 0x60 && byte < 0x67) ret += byte - 0x61 + 10 + 1; // -86
    ret += (((0x60i16 - byte) & (byte - 0x67)) >> 8) & (byte - 86);

    ret as u16
}

/// Decode a single byte encoded as two hexadecimal characters.
/// Second element of the tuple is non-zero if the `bytes` values are not in the valid range
/// (0-9, a-f, A-F).
#[inline(always)]
const fn decode_hex_byte(bytes: [u8; 2]) -> (u8, u16) {
    let hi = decode_nibble(bytes[0]);
    let lo = decode_nibble(bytes[1]);
    let byte = (hi << 4) | lo;
    let err = byte >> 8;
    let result = byte as u8;
    (result, err)
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U64, U128, U256};
    use hex_literal::hex;

    #[test]
    fn from_be_slice() {
        let bytes = hex!("00112233445566778899aabbccddeeff");
        let n = U128::from_be_slice(&bytes);
        assert_eq!(
            n.as_limbs(),
            &[
                Limb(0xccddeeff),
                Limb(0x8899aabb),
                Limb(0x44556677),
                Limb(0x00112233)
            ]
        );
    }

    #[test]
    fn from_le_slice() {
        let bytes = hex!("ffeeddccbbaa99887766554433221100");
        let n = U128::from_le_slice(&bytes);
        assert_eq!(n, U128::from_be_hex("00112233445566778899aabbccddeeff"));
    }

    #[test]
    fn from_be_hex() {
        let n = U64::from_be_hex("0011223344556677");
        assert_eq!(n.as_limbs(), &[Limb(0x44556677), Limb(0x00112233)]);
        assert_eq!(U64::from_be_hex("AABBCCDDEEFF0011"), U64::from_be_hex("aabbccddeeff0011"));
    }

    #[test]
    #[should_panic(expected = "invalid hex byte")]
    fn from_be_hex_invalid() {
        let _ = U64::from_be_hex("00112233445566zz");
    }

    #[test]
    #[should_panic(expected = "hex string is not the expected size")]
    fn from_be_hex_wrong_size() {
        let _ = U64::from_be_hex("0011");
    }

    #[test]
    fn write_bytes() {
        let n = U256::from_words([1, 0, 0, 0, 0, 0, 0, 0x8000_0000]);

        let mut be = [0u8; 32];
        n.write_be_bytes(&mut be);
        assert_eq!(be[0], 0x80);
        assert_eq!(be[31], 0x01);
        assert_eq!(U256::from_be_slice(&be), n);

        let mut le = [0u8; 32];
        n.write_le_bytes(&mut le);
        assert_eq!(le[0], 0x01);
        assert_eq!(le[31], 0x80);
        assert_eq!(U256::from_le_slice(&le), n);
    }
}
