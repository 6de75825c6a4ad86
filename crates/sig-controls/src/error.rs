//! Error types for control primitives.

use sig_core::SigError;
use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when constructing control blocks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided at a construction boundary.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Non-finite numeric input at a construction boundary.
    #[error(transparent)]
    Numeric(#[from] SigError),
}
