//! Error types for Keel

use thiserror::Error;

/// Core error type for Keel operations
#[derive(Error, Debug)]
pub enum KeelError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Keel operations
pub type Result<T> = std::result::Result<T, KeelError>;
