//! Execution backends.

use super::{Delay, Result};
use crate::{U256, U512};

/// Execution substrate performing the arithmetic of a [`WideMultiplier`].
///
/// Implementations must return either an exact product or an error. Partial
/// results are never returned.
///
/// [`WideMultiplier`]: super::WideMultiplier
pub trait Backend {
    /// Largest delay this substrate accepts.
    fn max_delay(&self) -> Delay {
        Delay::MAX
    }

    /// Compute `a * b`.
    fn execute(&self, a: &U256, b: &U256) -> Result<U512>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn max_delay(&self) -> Delay {
        B::max_delay(self)
    }

    fn execute(&self, a: &U256, b: &U256) -> Result<U512> {
        B::execute(self, a, b)
    }
}

/// Runs the schoolbook multiplication on the calling core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Software;

impl Backend for Software {
    fn execute(&self, a: &U256, b: &U256) -> Result<U512> {
        Ok(a.concatenating_mul(b))
    }
}
