//! Timing configuration.

use core::fmt;

/// Delay applied before a multiplication request, in platform cycles.
///
/// A delay shapes the timing of a request only. It is never an input to the
/// arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay(u32);

impl Delay {
    /// No delay.
    pub const ZERO: Self = Delay(0);

    /// The largest delay which can be expressed.
    pub const MAX: Self = Delay(u32::MAX);

    /// Create a delay of the given number of cycles.
    pub const fn from_cycles(cycles: u32) -> Self {
        Delay(cycles)
    }

    /// Number of cycles.
    pub const fn cycles(self) -> u32 {
        self.0
    }

    /// Busy-wait for this many cycles.
    #[inline]
    pub(crate) fn wait(self) {
        for _ in 0..self.0 {
            core::hint::spin_loop();
        }
    }
}

impl From<u32> for Delay {
    fn from(cycles: u32) -> Delay {
        Delay(cycles)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cycles", self.0)
    }
}

/// Multiplier configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// Delay applied before each request.
    pub delay: Delay,
}

impl Config {
    /// Default configuration: no delay.
    pub const fn new() -> Self {
        Self { delay: Delay::ZERO }
    }

    /// Set the delay applied before each request.
    pub const fn delay(mut self, delay: Delay) -> Self {
        self.delay = delay;
        self
    }
}
