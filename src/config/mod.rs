use serde::Deserialize;
use std::path::PathBuf;

use crate::services::storage::{
    validate_key, FileStore, MemoryStore, SnapshotStore, StorageError, DEFAULT_STORAGE_KEY,
};

/// Where the job snapshot lives.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory holding the snapshot file for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the job list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default)]
    pub storage_backend: StorageBackend,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Deserialize from `(NAME, value)` pairs and reject settings the
    /// store could never use.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: AppConfig = envy::from_iter(vars)?;
        validate_key(&config.storage_key)?;
        Ok(config)
    }

    /// Build the snapshot store this configuration points at.
    pub fn snapshot_store(&self) -> SnapshotStore {
        match self.storage_backend {
            StorageBackend::File => SnapshotStore::new(
                FileStore::new(self.data_dir.clone()),
                self.storage_key.clone(),
            ),
            StorageBackend::Memory => {
                SnapshotStore::new(MemoryStore::new(), self.storage_key.clone())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid STORAGE_KEY: {0}")]
    StorageKey(#[from] StorageError),
}
