//! Error type definitions for hashing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for hashing operations
///
/// Every variant belongs to one of two classes, see [`ErrorKind`]: a bad
/// argument handed to an operation, or an operation invoked on a state that
/// can no longer accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument, such as misaligned input in block mode or input
    /// exceeding the configured counter width
    InvalidArgument {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation not permitted in the current state (e.g. finalizing twice)
    MisusedState {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition on the arguments was violated
    InvalidArgument,
    /// The state machine was driven out of order
    MisusedState,
}

/// Result type for hashing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidLength { .. } => ErrorKind::InvalidArgument,
            Self::MisusedState { .. } => ErrorKind::MisusedState,
        }
    }

    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidArgument { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::MisusedState { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping everything else
    pub fn with_context(mut self, context: &'static str) -> Self {
        match &mut self {
            Self::InvalidArgument { context: c, .. }
            | Self::InvalidLength { context: c, .. }
            | Self::MisusedState { context: c, .. } => *c = context,
        }
        self
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidArgument { context, message } => {
                write!(f, "Invalid argument: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidArgument { context } => {
                write!(f, "Invalid argument: {}", context)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::MisusedState { context, message } => {
                write!(f, "Misused state: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::MisusedState { context } => {
                write!(f, "Misused state: {}", context)
            },
        }
    }
}
