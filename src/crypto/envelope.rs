//! Passphrase-sealed envelopes (PBKDF2-SHA256 + AES-256-GCM)
//!
//! An [`Envelope`] is the only thing GhostVault ever persists. Its JSON shape
//! is fixed so other tools can produce and consume the same records:
//!
//! ```json
//! { "v": 1, "salt": "<base64>", "iv": "<base64>", "cipher": "<base64>", "ts": 1700000000000 }
//! ```
//!
//! Salt and nonce are fresh for every seal. The timestamp sits outside the
//! authentication boundary and is informational only.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GhostVaultError, GhostVaultResult};

use super::key_derivation::{derive_key, SALT_SIZE};

/// The single supported envelope schema version
pub const ENVELOPE_VERSION: u8 = 1;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// A sealed note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Schema version
    #[serde(rename = "v")]
    pub version: u8,
    /// Key derivation salt (base64)
    pub salt: String,
    /// AES-GCM nonce (base64)
    #[serde(rename = "iv")]
    pub nonce: String,
    /// Ciphertext with appended authentication tag (base64)
    #[serde(rename = "cipher")]
    pub ciphertext: String,
    /// Milliseconds since the Unix epoch when the envelope was sealed
    #[serde(rename = "ts", default)]
    pub timestamp: i64,
}

impl Envelope {
    fn new(salt: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            salt: STANDARD.encode(salt),
            nonce: STANDARD.encode(nonce),
            ciphertext: STANDARD.encode(ciphertext),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Parse a stored envelope.
    ///
    /// Anything that is not a well-formed version 1 envelope yields `None`:
    /// callers treat it as an empty slot rather than as corruption.
    pub fn parse(raw: &str) -> Option<Self> {
        let envelope: Envelope = serde_json::from_str(raw).ok()?;
        envelope.is_well_formed().then_some(envelope)
    }

    /// Serialize to the compact storage form
    pub fn to_json(&self) -> GhostVaultResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Version matches and every binary field is present
    pub fn is_well_formed(&self) -> bool {
        self.version == ENVELOPE_VERSION
            && !self.salt.is_empty()
            && !self.nonce.is_empty()
            && !self.ciphertext.is_empty()
    }

    /// When the envelope was sealed, if the timestamp is representable
    pub fn sealed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Length of the decoded ciphertext (including the tag), if it decodes
    pub fn ciphertext_len(&self) -> Option<usize> {
        STANDARD.decode(&self.ciphertext).ok().map(|c| c.len())
    }
}

/// Seal `plaintext` under `passphrase`
///
/// Generates a fresh salt and nonce for each call.
pub fn encrypt(plaintext: &str, passphrase: &str) -> GhostVaultResult<Envelope> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(passphrase, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| GhostVaultError::EncryptionFailed(format!("Failed to create cipher: {}", e)))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
        .map_err(|e| GhostVaultError::EncryptionFailed(e.to_string()))?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "sealed envelope"
    );

    Ok(Envelope::new(&salt, &nonce_bytes, &ciphertext))
}

/// Open an envelope with `passphrase`
///
/// The version is checked before any key derivation. Every other failure
/// collapses into [`GhostVaultError::InvalidPassphraseOrCorrupted`].
pub fn decrypt(envelope: &Envelope, passphrase: &str) -> GhostVaultResult<String> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(GhostVaultError::UnsupportedVersion(envelope.version));
    }

    open(envelope, passphrase).map_err(|reason| {
        tracing::debug!(reason, "envelope rejected");
        GhostVaultError::InvalidPassphraseOrCorrupted
    })
}

// The reason string is for debug logs only and never reaches the caller.
fn open(envelope: &Envelope, passphrase: &str) -> Result<String, &'static str> {
    let salt = STANDARD.decode(&envelope.salt).map_err(|_| "salt encoding")?;
    let nonce_bytes = STANDARD.decode(&envelope.nonce).map_err(|_| "nonce encoding")?;
    if nonce_bytes.len() != NONCE_SIZE {
        return Err("nonce size");
    }
    let ciphertext = STANDARD
        .decode(&envelope.ciphertext)
        .map_err(|_| "ciphertext encoding")?;

    let key = derive_key(passphrase, &salt).map_err(|_| "key derivation")?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| "cipher init")?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| "authentication")?;

    String::from_utf8(plaintext).map_err(|_| "utf-8")
}
