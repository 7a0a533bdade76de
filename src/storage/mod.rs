//! Storage layer for GhostVault
//!
//! A minimal key-value abstraction: the vault only ever needs one slot, but
//! the slot's location is injected so the vault service can be exercised
//! against memory in tests and against files in the CLI.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::error::GhostVaultResult;

/// Synchronous string key-value store
pub trait VaultStore: Send + Sync {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> GhostVaultResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> GhostVaultResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> GhostVaultResult<()>;
}

impl<S: VaultStore + ?Sized> VaultStore for Arc<S> {
    fn get(&self, key: &str) -> GhostVaultResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GhostVaultResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> GhostVaultResult<()> {
        (**self).delete(key)
    }
}
