//! Error types for pipeline runs.

use thiserror::Error;

/// Errors encountered while setting up or running a pipeline.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sig_dsp::DspError> for SimError {
    fn from(e: sig_dsp::DspError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<sig_controls::ControlError> for SimError {
    fn from(e: sig_controls::ControlError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<sig_core::SigError> for SimError {
    fn from(e: sig_core::SigError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
