use thiserror::Error;

pub type SigResult<T> = Result<T, SigError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SigError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
