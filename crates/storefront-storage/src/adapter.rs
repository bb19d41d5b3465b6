//! The storage capability every backend implements.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Durable key-value capability handed to a store.
///
/// Values are opaque bytes. Implementations must be safe to share between
/// store instances; two stores pointed at the same adapter and key see each
/// other's writes (last write wins).
pub trait StorageAdapter: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed JSON access on top of any [`StorageAdapter`].
pub trait StorageExt: StorageAdapter {
    /// Read and deserialize a JSON value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let blob: Option<PersistedBlob> = storage.get_json("web-cart")?;
    /// ```
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value as JSON and store it.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, &bytes)
    }
}

impl<S: StorageAdapter + ?Sized> StorageExt for S {}
