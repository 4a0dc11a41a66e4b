//! Error handling for the BLAKE2s engine

use core::fmt;

use tinyblake_api::{Error as CoreError, Result as CoreResult};

#[cfg(feature = "std")]
use std::string::ToString;

/// The error type for the hash engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The hash state was driven out of order
    State {
        /// Operation that was rejected
        operation: &'static str,
        /// Why the state cannot accept it
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hash engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::State { operation, reason } => {
                write!(f, "Invalid state for {}: {}", operation, reason)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidArgument {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::State { operation, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::MisusedState {
                    context: operation,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
        }
    }
}

/// Convert an engine result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export API error handling traits for convenience
pub use tinyblake_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
