//! [`Uint`] multiplication operations.

use core::ops::{Mul, MulAssign};

use subtle::CtOption;

use crate::{CheckedMul, Uint, Zero};

pub(crate) mod schoolbook;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Compute "wide" multiplication as a 2-tuple containing the `(lo, hi)` components of the
    /// product, whose sizes correspond to the sizes of the operands.
    ///
    /// Every limb of both operands takes part, including leading zero limbs, and the product
    /// is exact: `lo + hi * 2^(32 * LIMBS) == self * rhs`.
    pub const fn widening_mul<const RHS_LIMBS: usize>(
        &self,
        rhs: &Uint<RHS_LIMBS>,
    ) -> (Self, Uint<RHS_LIMBS>) {
        let mut lo = Self::ZERO;
        let mut hi = Uint::<RHS_LIMBS>::ZERO;
        schoolbook::mul_wide(&self.limbs, &rhs.limbs, &mut lo.limbs, &mut hi.limbs);
        (lo, hi)
    }

    /// Multiply `self` by `rhs`, returning a concatenated "wide" result.
    ///
    /// # Panics
    /// - if `LIMBS + RHS_LIMBS != WIDE_LIMBS`
    pub const fn concatenating_mul<const RHS_LIMBS: usize, const WIDE_LIMBS: usize>(
        &self,
        rhs: &Uint<RHS_LIMBS>,
    ) -> Uint<WIDE_LIMBS> {
        let (lo, hi) = self.widening_mul(rhs);
        lo.concat_mixed(&hi)
    }

    /// Perform wrapping multiplication, discarding overflow.
    pub const fn wrapping_mul<const RHS_LIMBS: usize>(&self, rhs: &Uint<RHS_LIMBS>) -> Self {
        let mut lo = Uint::ZERO;
        schoolbook::wrapping_mul(&self.limbs, &rhs.limbs, &mut lo.limbs);
        lo
    }
}

/// Squaring operations
impl<const LIMBS: usize> Uint<LIMBS> {
    /// Square self, returning a "wide" result in two parts as (lo, hi).
    pub const fn square_wide(&self) -> (Self, Self) {
        let mut lo = Self::ZERO;
        let mut hi = Self::ZERO;
        schoolbook::square_wide(&self.limbs, &mut lo.limbs, &mut hi.limbs);
        (lo, hi)
    }

    /// Square self, returning a concatenated "wide" result.
    ///
    /// # Panics
    /// - if `2 * LIMBS != WIDE_LIMBS`
    pub const fn widening_square<const WIDE_LIMBS: usize>(&self) -> Uint<WIDE_LIMBS> {
        let (lo, hi) = self.square_wide();
        lo.concat_mixed(&hi)
    }
}

impl<const LIMBS: usize, const RHS_LIMBS: usize> CheckedMul<Uint<RHS_LIMBS>> for Uint<LIMBS> {
    #[inline]
    fn checked_mul(&self, rhs: &Uint<RHS_LIMBS>) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(rhs);
        CtOption::new(lo, hi.is_zero())
    }
}

impl<const LIMBS: usize, const RHS_LIMBS: usize> Mul<Uint<RHS_LIMBS>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: Uint<RHS_LIMBS>) -> Self {
        self.mul(&rhs)
    }
}

impl<const LIMBS: usize, const RHS_LIMBS: usize> Mul<&Uint<RHS_LIMBS>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: &Uint<RHS_LIMBS>) -> Self {
        (&self).mul(rhs)
    }
}

impl<const LIMBS: usize, const RHS_LIMBS: usize> Mul<&Uint<RHS_LIMBS>> for &Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: &Uint<RHS_LIMBS>) -> Self::Output {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl<const LIMBS: usize, const RHS_LIMBS: usize> MulAssign<&Uint<RHS_LIMBS>> for Uint<LIMBS> {
    fn mul_assign(&mut self, rhs: &Uint<RHS_LIMBS>) {
        *self = *self * rhs;
    }
}

impl<const LIMBS: usize> num_traits::WrappingMul for Uint<LIMBS> {
    fn wrapping_mul(&self, v: &Self) -> Self {
        Uint::wrapping_mul(self, v)
    }
}

impl<const LIMBS: usize> num_traits::One for Uint<LIMBS> {
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use crate::{CheckedMul, U64, U128, U256, U512, Uint, Zero};

    #[test]
    fn widening_mul_zero_and_one() {
        assert_eq!(U64::ZERO.widening_mul(&U64::ZERO), (U64::ZERO, U64::ZERO));
        assert_eq!(U64::ZERO.widening_mul(&U64::ONE), (U64::ZERO, U64::ZERO));
        assert_eq!(U64::ONE.widening_mul(&U64::ZERO), (U64::ZERO, U64::ZERO));
        assert_eq!(U64::ONE.widening_mul(&U64::ONE), (U64::ONE, U64::ZERO));
    }

    #[test]
    fn widening_mul_lo_only() {
        let primes: &[u32] = &[3, 5, 17, 257, 65537];

        for &a_int in primes {
            for &b_int in primes {
                let (lo, hi) = U64::from_u32(a_int).widening_mul(&U64::from_u32(b_int));
                let expected = U64::from_u64(a_int as u64 * b_int as u64);
                assert_eq!(lo, expected);
                assert!(bool::from(hi.is_zero()));
            }
        }
    }

    #[test]
    fn widening_mul_mixed_widths() {
        let a = U64::from_u64(0x0011223344556677);
        let b = U128::from_u128(0x8899aabbccddeeff_8899aabbccddeeff);
        let expected = U192_HEX;
        let (lo, hi) = a.widening_mul(&b);
        let wide: Uint<6> = lo.concat_mixed(&hi);
        assert_eq!(wide, Uint::<6>::from_be_hex(expected));
        let (lo, hi) = b.widening_mul(&a);
        let wide: Uint<6> = lo.concat_mixed(&hi);
        assert_eq!(wide, Uint::<6>::from_be_hex(expected));
    }

    // 0x0011223344556677 * 0x8899aabbccddeeff8899aabbccddeeff
    const U192_HEX: &str = "000924741a38f2687527c959d947a4f1751ea4e5bf0eb289";

    #[test]
    fn concatenating_mul_scenario() {
        let a = U256::from_u32(3);
        let b = U256::from_u32(5);
        let product: U512 = a.concatenating_mul(&b);
        let mut expected = [0u32; 16];
        expected[0] = 15;
        assert_eq!(product.to_words(), expected);
    }

    #[test]
    fn concatenating_mul_all_ones() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let product: U512 = U256::MAX.concatenating_mul(&U256::MAX);
        let mut expected = [u32::MAX; 16];
        expected[0] = 1;
        for word in &mut expected[1..8] {
            *word = 0;
        }
        expected[8] = 0xffff_fffe;
        assert_eq!(product.to_words(), expected);
    }

    #[test]
    fn checked_mul_ok() {
        let n = U64::from_u32(0xffff_ffff);
        assert_eq!(
            n.checked_mul(&n).unwrap(),
            U64::from_u64(0xffff_fffe_0000_0001)
        );
    }

    #[test]
    fn checked_mul_overflow() {
        let n = U64::from_u64(0xffff_ffff_ffff_ffff);
        assert!(bool::from(n.checked_mul(&n).is_none()));
    }

    #[test]
    #[should_panic(expected = "attempted to multiply with overflow")]
    fn mul_overflow_panics() {
        let _ = U256::MAX * U256::MAX;
    }

    #[test]
    fn wrapping_mul_keeps_low_half() {
        assert_eq!(U256::MAX.wrapping_mul(&U256::MAX), U256::ONE);
    }

    #[test]
    fn square_wide_matches_widening_mul() {
        let n = U256::from_be_hex(
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        );
        assert_eq!(n.square_wide(), n.widening_mul(&n));
        let sq: U512 = U256::MAX.widening_square();
        assert_eq!(sq, U256::MAX.concatenating_mul(&U256::MAX));
    }
}
