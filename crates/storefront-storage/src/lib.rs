//! Pluggable per-device persistence for the storefront stores.
//!
//! A store only ever talks to the narrow [`StorageAdapter`] capability:
//! raw bytes in, raw bytes out, keyed by the store name. Concrete backends
//! decide where those bytes live.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_storage::{FileStorage, StorageAdapter, StorageExt};
//!
//! let storage: Arc<dyn StorageAdapter> = Arc::new(FileStorage::open("./.storefront")?);
//!
//! // Raw bytes
//! storage.set("web-cart", br#"{"state":{"items":[]},"version":0}"#)?;
//!
//! // Typed values
//! let blob: Option<serde_json::Value> = storage.get_json("web-cart")?;
//! ```

mod adapter;
mod error;
mod file;
mod memory;

pub use adapter::{StorageAdapter, StorageExt};
pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStorage, MemoryStorage, StorageAdapter, StorageError, StorageExt};
}
