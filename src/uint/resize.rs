use super::Uint;
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Construct a `Uint<T>` from the unsigned integer value,
    /// truncating the upper bits if the value is too large to be
    /// represented.
    #[inline(always)]
    pub const fn resize<const T: usize>(&self) -> Uint<T> {
        let mut res = [Limb::ZERO; T];
        let mut i = 0;
        let dim = if T < LIMBS { T } else { LIMBS };
        while i < dim {
            res[i] = self.limbs[i];
            i += 1;
        }
        Uint::new(res)
    }

    /// Place this value in the low limbs of a wider `Uint<T>`, filling the
    /// high limbs with zero.
    ///
    /// # Panics
    /// - if `T < LIMBS`: zero extension never drops limbs.
    #[inline]
    pub const fn zero_extend<const T: usize>(&self) -> Uint<T> {
        assert!(T >= LIMBS, "zero extension to a narrower width");
        self.resize()
    }
}
