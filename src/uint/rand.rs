//! Random number generator support

use super::Uint;
use crate::{Limb, Random};
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<const LIMBS: usize> Random for Uint<LIMBS> {
    /// Generate a random `Uint`, sampling every limb.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::random(rng);
        }

        limbs.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Random, U256};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random_is_seed_deterministic() {
        let a = U256::random(&mut ChaCha8Rng::seed_from_u64(1));
        let b = U256::random(&mut ChaCha8Rng::seed_from_u64(1));
        let c = U256::random(&mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
