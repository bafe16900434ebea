//! Error types for the core library

use thiserror::Error;

/// Custom error type for the core library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No entity of the given kind has the requested id
    #[error("{0} not found")]
    NotFound(&'static str),

    /// One or more required fields were absent or empty
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
