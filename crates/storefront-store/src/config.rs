//! Store configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_observability::DEFAULT_MAX_HISTORY;
use storefront_storage::{FileStorage, MemoryStorage, StorageAdapter};

use crate::cart::SummaryRates;
use crate::error::StoreError;

/// Default storage key.
pub const DEFAULT_STORE_NAME: &str = "app-storage";

/// Default devtools label.
pub const DEFAULT_DEVTOOLS_NAME: &str = "app";

/// Configuration for a [`crate::CartStore`].
///
/// # Example
///
/// ```toml
/// name = "web-cart"
/// devtools_name = "web-cart"
///
/// [storage]
/// kind = "file"
/// dir = ".storefront"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Key the persisted state is stored under.
    #[serde(default = "default_name")]
    pub name: String,

    /// Label shown by inspection tooling.
    #[serde(default = "default_devtools_name")]
    pub devtools_name: String,

    /// Record actions for inspection tooling.
    #[serde(default = "default_devtools")]
    pub devtools: bool,

    /// Number of recorded actions kept.
    #[serde(default = "default_devtools_history")]
    pub devtools_history: usize,

    /// Persistence backend.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Order summary rates.
    #[serde(default)]
    pub summary: SummaryRates,
}

fn default_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_devtools_name() -> String {
    DEFAULT_DEVTOOLS_NAME.to_string()
}

fn default_devtools() -> bool {
    true
}

fn default_devtools_history() -> usize {
    DEFAULT_MAX_HISTORY
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            devtools_name: default_devtools_name(),
            devtools: default_devtools(),
            devtools_history: default_devtools_history(),
            storage: StorageConfig::default(),
            summary: SummaryRates::default(),
        }
    }
}

impl StoreConfig {
    /// Config with a store name and everything else defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        serde_json::from_str(content).map_err(|e| StoreError::Config(e.to_string()))
    }
}

/// Which persistence backend to use.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// In-memory only; state ends with the session.
    #[default]
    None,
    /// Process-local map (useful for tests and previews).
    Memory,
    /// One JSON file per store inside `dir`.
    File {
        /// Directory holding the store files.
        dir: PathBuf,
    },
}

impl StorageConfig {
    /// Build the configured backend.
    pub fn open(&self) -> Result<Option<Arc<dyn StorageAdapter>>, StoreError> {
        let storage: Arc<dyn StorageAdapter> = match self {
            Self::None => return Ok(None),
            Self::Memory => Arc::new(MemoryStorage::new()),
            Self::File { dir } => Arc::new(FileStorage::open(dir)?),
        };
        Ok(Some(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "app-storage");
        assert_eq!(config.devtools_name, "app");
        assert!(config.devtools);
        assert_eq!(config.storage, StorageConfig::None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(StoreConfig::from_toml_str("").unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_toml_with_file_storage() {
        let config = StoreConfig::from_toml_str(
            r#"
            name = "web-cart"
            devtools_name = "web-cart"
            devtools_history = 10

            [storage]
            kind = "file"
            dir = "/tmp/storefront"

            [summary]
            discount_rate = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "web-cart");
        assert_eq!(config.devtools_history, 10);
        assert_eq!(
            config.storage,
            StorageConfig::File {
                dir: PathBuf::from("/tmp/storefront")
            }
        );
        assert_eq!(config.summary.discount_rate, 0.1);
        assert_eq!(config.summary.delivery_fee, 15.0);
    }

    #[test]
    fn test_json_config() {
        let config =
            StoreConfig::from_json_str(r#"{"name": "mobile-cart", "storage": {"kind": "memory"}}"#)
                .unwrap();
        assert_eq!(config.name, "mobile-cart");
        assert_eq!(config.storage, StorageConfig::Memory);
    }

    #[test]
    fn test_invalid_config() {
        let result = StoreConfig::from_toml_str("name = 3");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "name = \"from-file\"\n").unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.name, "from-file");
    }

    #[test]
    fn test_load_missing_file() {
        let result = StoreConfig::load("/definitely/not/here.toml");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn test_open_storage() {
        assert!(StorageConfig::None.open().unwrap().is_none());
        assert!(StorageConfig::Memory.open().unwrap().is_some());

        let dir = tempfile::tempdir().unwrap();
        let file = StorageConfig::File {
            dir: dir.path().join("data"),
        };
        assert!(file.open().unwrap().is_some());
        assert!(dir.path().join("data").is_dir());
    }
}
