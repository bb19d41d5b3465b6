//! Write-through persistence of the store state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_storage::{StorageAdapter, StorageExt};

use crate::error::StoreError;
use crate::state::StoreState;

/// Version stamped on every persisted blob.
pub const PERSIST_VERSION: u32 = 0;

/// Persisted blob: `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedBlob<S> {
    state: S,
    version: u32,
}

/// Loads and saves one store's state under its name.
#[derive(Clone)]
pub struct Persister {
    name: String,
    storage: Arc<dyn StorageAdapter>,
}

impl std::fmt::Debug for Persister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persister")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Persister {
    /// Create a persister for `name`.
    pub fn new(name: impl Into<String>, storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            name: name.into(),
            storage,
        }
    }

    /// The storage key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Load the persisted state.
    ///
    /// Returns `None` when nothing is stored or when the blob was written
    /// with a different version.
    pub fn load(&self) -> Result<Option<StoreState>, StoreError> {
        let Some(blob) = self.storage.get_json::<PersistedBlob<StoreState>>(&self.name)? else {
            return Ok(None);
        };

        if blob.version != PERSIST_VERSION {
            tracing::warn!(
                store = %self.name,
                found = blob.version,
                expected = PERSIST_VERSION,
                "discarding persisted state with unknown version"
            );
            return Ok(None);
        }

        Ok(Some(blob.state))
    }

    /// Save `state`, replacing whatever was stored.
    pub fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let blob = PersistedBlob {
            state,
            version: PERSIST_VERSION,
        };
        self.storage.set_json(&self.name, &blob)?;
        Ok(())
    }
}
