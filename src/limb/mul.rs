//! Limb multiplication

use crate::{
    CheckedMul, Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};
use num_traits::WrappingMul;
use subtle::CtOption;

impl Limb {
    /// Computes `(self * rhs) + addend + carry`, returning the result along with the new carry.
    ///
    /// The product is formed in a [`WideWord`][`crate::WideWord`] and never narrowed before
    /// the addend and carry are folded in, so the high word is exact.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Compute "wide" multiplication as a `(lo, hi)` pair twice the size of the input.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(&self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }
}

impl CheckedMul for Limb {
    #[inline]
    fn checked_mul(&self, rhs: &Self) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(*rhs);
        CtOption::new(lo, hi.is_zero())
    }
}

impl Mul<Limb> for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: Limb) -> Self {
        self.checked_mul(&rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Limb> for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: &Limb) -> Self {
        self * *rhs
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        Limb::wrapping_mul(self, *v)
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckedMul, Limb};

    #[test]
    fn checked_mul_ok() {
        let n = Limb(0xffff);
        assert_eq!(n.checked_mul(&n).unwrap(), Limb(0xfffe_0001));
    }

    #[test]
    fn checked_mul_overflow() {
        let n = Limb::MAX;
        assert!(bool::from(n.checked_mul(&n).is_none()));
    }

    #[test]
    fn widening_mul_max() {
        assert_eq!(Limb::MAX.widening_mul(Limb::MAX), (Limb::ONE, Limb(0xffff_fffe)));
    }

    #[test]
    fn carrying_mul_add_max() {
        assert_eq!(
            Limb::MAX.carrying_mul_add(Limb::MAX, Limb::MAX, Limb::MAX),
            (Limb::MAX, Limb::MAX)
        );
        assert_eq!(
            Limb(3).carrying_mul_add(Limb(5), Limb::ZERO, Limb::ZERO),
            (Limb(15), Limb::ZERO)
        );
    }
}
