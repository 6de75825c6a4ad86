//! Error types for DSP block construction.

use sig_core::SigError;
use thiserror::Error;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur when constructing DSP blocks.
///
/// Runtime processing never fails: unstable filters diverge through
/// ordinary floating-point values instead of returning errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DspError {
    /// Invalid argument provided at a construction boundary.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Non-finite numeric input at a construction boundary.
    #[error(transparent)]
    Numeric(#[from] SigError),
}
