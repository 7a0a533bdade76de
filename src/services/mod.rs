//! Service layer for GhostVault
//!
//! The service layer sits between the codec and the store, enforcing the
//! vault-slot lifecycle.

pub mod vault;

pub use vault::{OpenedNote, VaultService, VaultState, VAULT_KEY};
