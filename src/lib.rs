//! GhostVault - local burn-after-reading note locker
//!
//! A note is sealed with a passphrase into an [`Envelope`](crypto::Envelope):
//! the key comes from PBKDF2-HMAC-SHA256 (250,000 iterations, random 16-byte
//! salt) and the note is encrypted with AES-256-GCM under a random 12-byte
//! nonce. One envelope at a time lives in a single storage slot, optionally
//! destroyed after it is first opened.
//!
//! # Architecture
//!
//! - `crypto`: envelope codec, key derivation, passphrase generator
//! - `storage`: key-value store abstraction with file and memory backends
//! - `services`: the vault-slot lifecycle (seal, open, clear)
//! - `config`: path resolution and user settings
//! - `cli` / `display`: command handlers and terminal formatting
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use ghostvault::services::VaultService;
//! use ghostvault::storage::MemoryStore;
//!
//! let vault = VaultService::new(MemoryStore::new());
//! vault.seal("meet at noon", "correct-horse")?;
//!
//! let opened = vault.open("correct-horse")?;
//! assert_eq!(opened.plaintext, "meet at noon");
//! assert!(vault.load()?.is_none()); // burned
//! # Ok::<(), ghostvault::GhostVaultError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod services;
pub mod storage;

pub use error::{GhostVaultError, GhostVaultResult};
