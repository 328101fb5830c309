//! [`Uint`] equality.

use super::Uint;
use crate::Word;
use subtle::{Choice, ConstantTimeEq};

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc: Word = 0;

        for i in 0..LIMBS {
            acc |= self.limbs[i].0 ^ other.limbs[i].0;
        }

        acc.ct_eq(&0)
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
