//! Partitioned execution over a cluster of compute lanes.

use super::{Backend, Delay, Error, Result};
use crate::{Limb, U256, U512, uint::mul::schoolbook};

/// Splits the partial-product grid of a multiplication across `N` compute
/// lanes.
///
/// Row `i` of the grid, `a[i] * b * 2^(32 * i)`, is handled by lane `i % N`.
/// Each lane accumulates its rows into a private 512-bit accumulator, and the
/// accumulators are summed with full carry propagation once every lane is
/// done. Only the reduced product leaves [`Backend::execute`].
///
/// The lanes run one after another on the calling thread: only the
/// partitioning of the grid and the final reduction are modelled.
///
/// A cluster without lanes (`N == 0`) has nowhere to run and reports
/// [`Error::ResourceUnavailable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes<const N: usize> {
    max_delay: Delay,
}

impl<const N: usize> Lanes<N> {
    /// Number of lanes in the cluster.
    pub const LANES: usize = N;

    /// Create a cluster accepting any delay.
    pub const fn new() -> Self {
        Self {
            max_delay: Delay::MAX,
        }
    }

    /// Limit the delay the cluster accepts.
    pub const fn with_max_delay(mut self, max_delay: Delay) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Accumulate the rows assigned to `lane` into a fresh accumulator.
    fn run_lane(lane: usize, a: &U256, b: &U256) -> U512 {
        let mut acc = U512::ZERO;
        let mut row = lane;

        while row < U256::LIMBS {
            let carry = schoolbook::mul_add_row(
                a.as_limbs()[row],
                b.as_limbs(),
                row,
                acc.as_limbs_mut(),
                &mut [],
            );
            assert!(carry.0 == 0, "carry out of the product width");
            row += N;
        }

        acc
    }
}

impl<const N: usize> Default for Lanes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Backend for Lanes<N> {
    fn max_delay(&self) -> Delay {
        self.max_delay
    }

    fn execute(&self, a: &U256, b: &U256) -> Result<U512> {
        if N == 0 {
            return Err(Error::ResourceUnavailable);
        }

        let mut partials = [U512::ZERO; N];
        for (lane, partial) in partials.iter_mut().enumerate() {
            *partial = Self::run_lane(lane, a, b);
        }

        let mut product = U512::ZERO;
        for partial in &partials {
            let carry;
            (product, carry) = product.carrying_add(partial, Limb::ZERO);
            assert!(carry.0 == 0, "carry out of the product width");
        }

        Ok(product)
    }
}
