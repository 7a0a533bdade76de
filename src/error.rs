//! Custom error types for GhostVault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for GhostVault operations
#[derive(Error, Debug)]
pub enum GhostVaultError {
    /// Key derivation or encryption was rejected by the underlying primitive
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed for any reason.
    ///
    /// Wrong passphrase and tampered data are deliberately indistinguishable.
    #[error("Invalid passphrase or corrupted data.")]
    InvalidPassphraseOrCorrupted,

    /// Envelope carries a schema version this build does not understand
    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    /// The vault slot holds no valid envelope
    #[error("No vault data found.")]
    NoVault,

    /// Nothing to seal
    #[error("Refusing to seal an empty note")]
    EmptyNote,

    /// Another seal/open/clear is still running against this vault
    #[error("Vault is busy with another operation")]
    Busy,

    /// A background seal/open task panicked or was aborted
    #[error("Background task failed: {0}")]
    Task(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GhostVaultError {
    /// Check if this is the undifferentiated decryption failure
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::InvalidPassphraseOrCorrupted)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyNote)
    }
}

impl From<std::io::Error> for GhostVaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GhostVaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for GhostVault operations
pub type GhostVaultResult<T> = Result<T, GhostVaultError>;
