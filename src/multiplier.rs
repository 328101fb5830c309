//! The 256-bit × 256-bit → 512-bit wide multiplier.
//!
//! [`WideMultiplier`] is the synchronous entry point used by callers on the
//! target platform. It owns a [`Config`] (currently just the [`Delay`] applied
//! before each request) and an execution [`Backend`] which performs the
//! actual arithmetic:
//!
//! - [`Software`] runs the schoolbook multiplication on the calling core.
//! - [`Lanes`] splits the rows of the partial-product grid across a cluster
//!   of cooperating compute lanes and reduces their accumulators before
//!   returning.
//!
//! Whatever the backend, a call blocks until the fully accumulated product is
//! available, and the delay never changes the numeric result.
//!
//! ```
//! use wide_mul::{U256, multiplier::{Status, WideMultiplier}};
//!
//! let mut multiplier = WideMultiplier::new();
//! multiplier.set_delay(50);
//!
//! let (product, status) = multiplier.multiply(&U256::from_u32(3), &U256::from_u32(5));
//! assert_eq!(status, Status::Ok);
//! assert_eq!(product.word(0), 15);
//! ```

mod backend;
mod delay;
mod error;
mod lanes;

pub use self::{
    backend::{Backend, Software},
    delay::{Config, Delay},
    error::{Error, Result},
    lanes::Lanes,
};

use crate::{U256, U512};

/// Outcome of a multiplication request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The product is valid and exact.
    Ok,

    /// The execution substrate could not perform the multiplication; the
    /// accompanying product must not be trusted.
    Failed,
}

impl Status {
    /// Process exit code convention: `0` for [`Status::Ok`], nonzero otherwise.
    pub const fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Failed => -1,
        }
    }

    /// Is this [`Status::Ok`]?
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(_) => Status::Failed,
        }
    }
}

/// Stateless wide multiplier dispatching to an execution [`Backend`].
///
/// The multiplier keeps no state derived from previous requests: every call
/// works on call-local storage only, so a shared reference may be used from
/// several threads at once when the backend allows it.
#[derive(Clone, Debug, Default)]
pub struct WideMultiplier<B = Software> {
    backend: B,
    config: Config,
}

impl WideMultiplier<Software> {
    /// Create a multiplier running on the [`Software`] backend with the
    /// default configuration.
    pub const fn new() -> Self {
        Self::with_backend(Software)
    }
}

impl<B> WideMultiplier<B> {
    /// Create a multiplier running on the given backend with the default
    /// configuration.
    pub const fn with_backend(backend: B) -> Self {
        Self {
            backend,
            config: Config::new(),
        }
    }

    /// Replace the whole configuration.
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the delay applied before each multiplication request, in platform
    /// cycles.
    ///
    /// The delay only affects timing. Whether the backend accepts it is
    /// checked when a multiplication is requested.
    pub fn set_delay(&mut self, amount: u32) {
        self.config.delay = Delay::from_cycles(amount);
    }

    /// Current configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Execution backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> WideMultiplier<B> {
    /// Multiply `a` by `b`, returning the exact 512-bit product.
    ///
    /// Errors are environment conditions only: the arithmetic itself cannot
    /// fail. Nothing is retried internally.
    pub fn try_multiply(&self, a: &U256, b: &U256) -> Result<U512> {
        let max = self.backend.max_delay();
        let requested = self.config.delay;
        if requested > max {
            return Err(Error::ConfigRejected { requested, max });
        }

        requested.wait();
        self.backend.execute(a, b)
    }

    /// Multiply `a` by `b`, returning the product along with a [`Status`].
    ///
    /// When the status is [`Status::Failed`] the product is zero and must not
    /// be used.
    pub fn multiply(&self, a: &U256, b: &U256) -> (U512, Status) {
        let result = self.try_multiply(a, b);
        let status = Status::from(&result);
        (result.unwrap_or(U512::ZERO), status)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Delay, Error, Lanes, Status, WideMultiplier};
    use crate::{U256, U512};

    #[test]
    fn status_codes() {
        assert_eq!(Status::Ok.code(), 0);
        assert_ne!(Status::Failed.code(), 0);
        assert!(Status::Ok.is_ok());
        assert!(!Status::Failed.is_ok());
    }

    #[test]
    fn three_times_five() {
        let mut multiplier = WideMultiplier::new();
        multiplier.set_delay(50);

        let (product, status) = multiplier.multiply(&U256::from_u32(3), &U256::from_u32(5));
        assert_eq!(status, Status::Ok);
        assert_eq!(product, U512::from_u32(15));
    }

    #[test]
    fn set_delay_updates_config() {
        let mut multiplier = WideMultiplier::new();
        assert_eq!(multiplier.config().delay, Delay::ZERO);
        multiplier.set_delay(7);
        assert_eq!(multiplier.config().delay, Delay::from_cycles(7));
    }

    #[test]
    fn rejected_delay_fails() {
        let lanes = Lanes::<4>::new().with_max_delay(Delay::from_cycles(10));
        let multiplier = WideMultiplier::with_backend(lanes)
            .with_config(Config::new().delay(Delay::from_cycles(11)));

        assert_eq!(
            multiplier.try_multiply(&U256::ONE, &U256::ONE),
            Err(Error::ConfigRejected {
                requested: Delay::from_cycles(11),
                max: Delay::from_cycles(10),
            })
        );

        let (product, status) = multiplier.multiply(&U256::ONE, &U256::ONE);
        assert_eq!(status, Status::Failed);
        assert_eq!(product, U512::ZERO);
    }

    #[test]
    fn missing_lanes_fail() {
        let multiplier = WideMultiplier::with_backend(Lanes::<0>::new());
        assert_eq!(
            multiplier.try_multiply(&U256::ONE, &U256::ONE),
            Err(Error::ResourceUnavailable)
        );
    }
}
