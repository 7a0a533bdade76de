//! Cryptographic functions for GhostVault
//!
//! Provides passphrase-sealed AES-256-GCM envelopes with PBKDF2-SHA256
//! key derivation, plus a random passphrase generator.

pub mod envelope;
pub mod key_derivation;
pub mod passphrase;
pub mod secure_memory;

pub use envelope::{decrypt, encrypt, Envelope, ENVELOPE_VERSION, NONCE_SIZE};
pub use key_derivation::{derive_key, DerivedKey, PBKDF2_ITERATIONS, SALT_SIZE};
pub use passphrase::{generate_passphrase, DEFAULT_PASSPHRASE_LENGTH, PASSPHRASE_ALPHABET};
pub use secure_memory::SecureString;
