use thiserror::Error;

use crate::rfc::recur::parse::ParseError;

/// Recurrence construction and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    /// Input does not follow the recurrence grammar.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    /// Input is well formed but uses a clause the engine does not model.
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// A field value is outside its allowed range.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
