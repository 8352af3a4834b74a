//! Field and decode error types.

use json_lift_value::ValueKind;
use thiserror::Error;

/// Why a single field could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    MissingKey,
    FailedConversion,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("object is missing key `{key}`")]
    MissingKey { key: String },
    #[error("failed to convert {found} value for key `{key}`")]
    FailedConversion { key: String, found: ValueKind },
}

impl FieldError {
    pub fn key(&self) -> &str {
        match self {
            FieldError::MissingKey { key } | FieldError::FailedConversion { key, .. } => key,
        }
    }

    pub fn cause(&self) -> Cause {
        match self {
            FieldError::MissingKey { .. } => Cause::MissingKey,
            FieldError::FailedConversion { .. } => Cause::FailedConversion,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Decoding produced nothing without any field reporting a failure,
    /// e.g. a nested value lifted without diagnostics.
    #[error("object was rejected without a field diagnostic")]
    Rejected,
}
