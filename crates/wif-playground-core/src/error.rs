// Rust guideline compliant 2026-10-18

//! Error types for the playground core library.

use thiserror::Error;

/// Result type alias for playground operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for playground operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key does not name one of the record slots.
    #[error("Invalid key: {0} (expected mapping, input or output)")]
    InvalidKey(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
