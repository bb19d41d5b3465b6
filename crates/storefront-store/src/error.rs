//! Store error types.

use storefront_storage::StorageError;
use thiserror::Error;

/// Errors from the fallible store entry points (configuration, explicit
/// flush/rehydrate). Cart and auth mutations never return these.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage backend failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Config(e.to_string())
    }
}
