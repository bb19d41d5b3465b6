//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backend.
    #[error("Failed to open storage: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to perform a backend operation.
    #[error("Storage operation failed: {0}")]
    Backend(String),
}
