//! Error types for sampling operations.
//!
//! Every failure is a contract violation detected before the generator
//! is touched: a call that returns `Err` leaves the stream exactly where
//! it was.

use thiserror::Error;

/// Errors produced by sampling operations.
///
/// # Examples
/// ```
/// use seedsample::{ErrorKind, RandomEngine};
///
/// let mut engine = RandomEngine::with_seed(7);
/// let err = engine.uniform_int(0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert!(err.to_string().contains("must be positive"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    /// A numeric parameter is outside its domain (probability, rate,
    /// shape, range bounds, weight vector).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required sequence was absent.
    #[error("null argument: {0}")]
    NullArgument(String),

    /// An index or count lies outside the bounds of its sequence.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

/// Fieldless discriminant of [`SampleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NullArgument,
    OutOfRange,
}

impl SampleError {
    /// Returns the kind of this error without its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SampleError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            SampleError::NullArgument(_) => ErrorKind::NullArgument,
            SampleError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SampleError::InvalidArgument(msg.into())
    }

    pub(crate) fn null(msg: impl Into<String>) -> Self {
        SampleError::NullArgument(msg.into())
    }

    pub(crate) fn out_of_range(msg: impl Into<String>) -> Self {
        SampleError::OutOfRange(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SampleError>;
