//! Error types for Skyburst.
//!
//! Every variant is a composition error raised synchronously by the call
//! that violated its precondition. Nothing here is transient or retried.

use thiserror::Error;

/// Top-level error type for Skyburst operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkyburstError {
    /// A value was outside its allowed range (radius, dimensions, position, lifetime).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required collaborator was never supplied.
    #[error("missing required value: {0}")]
    MissingRequiredValue(&'static str),

    /// Explicit division by an exact zero scalar.
    #[error("cannot divide a vector by zero ({0})")]
    DivideByZero(&'static str),
}

impl SkyburstError {
    /// Shorthand for building an [`SkyburstError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for Skyburst operations.
pub type SkyburstResult<T> = Result<T, SkyburstError>;
