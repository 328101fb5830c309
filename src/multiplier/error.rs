//! Error types.

use super::Delay;
use core::fmt;

/// Result type with the `wide-mul` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Environment conditions which prevent a multiplication from running.
///
/// Broken internal invariants, such as a carry leaving the product width,
/// are not represented here: they panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The execution substrate has no compute resource to run the request on.
    ResourceUnavailable,

    /// The configured delay is above what the execution substrate accepts.
    ConfigRejected {
        /// Delay requested by the configuration.
        requested: Delay,
        /// Largest delay the backend accepts.
        max: Delay,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceUnavailable => write!(f, "no compute resource available"),
            Error::ConfigRejected { requested, max } => {
                write!(f, "delay of {requested} rejected (maximum {max})")
            }
        }
    }
}

impl core::error::Error for Error {}
