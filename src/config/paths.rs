//! Path management for GhostVault
//!
//! ## Path Resolution Order
//!
//! 1. `GHOSTVAULT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ghostvault` or `~/.config/ghostvault`
//! 3. Windows: `%APPDATA%\ghostvault`

use std::path::PathBuf;

use crate::error::GhostVaultError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "GHOSTVAULT_DATA_DIR";

/// Manages all paths used by GhostVault
#[derive(Debug, Clone)]
pub struct GhostVaultPaths {
    base_dir: PathBuf,
}

impl GhostVaultPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GhostVaultError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GhostVaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ghostvault/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value store (~/.config/ghostvault/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), GhostVaultError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GhostVaultError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GhostVaultError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GhostVaultError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| GhostVaultError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ghostvault"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GhostVaultError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| GhostVaultError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ghostvault"))
}
