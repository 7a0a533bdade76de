//! File-backed key-value store
//!
//! Each key maps to `<data_dir>/<key>.json`.

use std::path::PathBuf;

use super::file_io::{read_text, remove_if_exists, write_text_atomic};
use super::VaultStore;
use crate::config::paths::GhostVaultPaths;
use crate::error::{GhostVaultError, GhostVaultResult};

/// Stores each key as its own file under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store in the configured data directory
    pub fn from_paths(paths: &GhostVaultPaths) -> GhostVaultResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> GhostVaultResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(GhostVaultError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl VaultStore for FileStore {
    fn get(&self, key: &str) -> GhostVaultResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> GhostVaultResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn delete(&self, key: &str) -> GhostVaultResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}
