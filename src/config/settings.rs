//! User settings for GhostVault
//!
//! Holds the burn-after-reading preference and the default length for
//! generated passphrases.

use serde::{Deserialize, Serialize};

use super::paths::GhostVaultPaths;
use crate::crypto::DEFAULT_PASSPHRASE_LENGTH;
use crate::error::GhostVaultError;

/// User settings for GhostVault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Delete the sealed note after it has been opened once
    #[serde(default = "default_burn_after_reading")]
    pub burn_after_reading: bool,

    /// Length of passphrases produced by `generate` and `seal --generate`
    #[serde(default = "default_passphrase_length")]
    pub passphrase_length: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_burn_after_reading() -> bool {
    true
}

fn default_passphrase_length() -> usize {
    DEFAULT_PASSPHRASE_LENGTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            burn_after_reading: default_burn_after_reading(),
            passphrase_length: default_passphrase_length(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &GhostVaultPaths) -> Result<Self, GhostVaultError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| GhostVaultError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| GhostVaultError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GhostVaultPaths) -> Result<(), GhostVaultError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GhostVaultError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GhostVaultError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
