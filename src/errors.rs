//! Error types for subseqfind
//!
//! The search itself never fails: "not found" is a normal outcome and
//! predicate errors are handed back to the caller untouched. These errors
//! cover the surrounding configuration and command-line layers.

use thiserror::Error;

/// Main error type for subseqfind
#[derive(Error, Debug)]
pub enum SearchError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid command-line or API arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Search error: {0}")]
    Generic(String),
}

/// Result type alias for subseqfind operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Convert anyhow errors to SearchError
impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        SearchError::Generic(err.to_string())
    }
}
