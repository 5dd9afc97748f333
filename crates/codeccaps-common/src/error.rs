//! Common error types for codeccaps.

use thiserror::Error;

/// Result type alias using the codeccaps error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for loading and validating capability data.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading a catalog file, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid catalog or capability record)
    #[error("configuration error: {0}")]
    Config(String),

    /// Decoder or resource not found
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a serialization error from any displayable type.
    pub fn serialization(msg: impl std::fmt::Display) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Create a config error from any displayable type.
    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create a not found error from any displayable type.
    pub fn not_found(msg: impl std::fmt::Display) -> Self {
        Self::NotFound(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err)
    }
}
