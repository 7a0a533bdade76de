//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! The iteration count is fixed: every envelope ever written was derived with
//! these parameters and decryption must reproduce them exactly.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{GhostVaultError, GhostVaultResult};

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 250_000;

/// Size of the per-envelope salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the derived AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// A derived encryption key, wiped from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

/// Derive an AES-256 key from a passphrase and salt
pub fn derive_key(passphrase: &str, salt: &[u8]) -> GhostVaultResult<DerivedKey> {
    if passphrase.is_empty() {
        return Err(GhostVaultError::EncryptionFailed(
            "passphrase must not be empty".to_string(),
        ));
    }
    if salt.len() != SALT_SIZE {
        return Err(GhostVaultError::EncryptionFailed(format!(
            "invalid salt size: expected {}, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    let mut key = DerivedKey {
        key: [0u8; KEY_SIZE],
    };
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.key);

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT_A: [u8; SALT_SIZE] = [7u8; SALT_SIZE];
    const SALT_B: [u8; SALT_SIZE] = [9u8; SALT_SIZE];

    #[test]
    fn test_same_inputs_same_key() {
        let key1 = derive_key("test_passphrase", &SALT_A).unwrap();
        let key2 = derive_key("test_passphrase", &SALT_A).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let key1 = derive_key("passphrase1", &SALT_A).unwrap();
        let key2 = derive_key("passphrase2", &SALT_A).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("same_passphrase", &SALT_A).unwrap();
        let key2 = derive_key("same_passphrase", &SALT_B).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_passphrase_rejected() {
        let result = derive_key("", &SALT_A);
        assert!(matches!(result, Err(GhostVaultError::EncryptionFailed(_))));
    }

    #[test]
    fn test_short_salt_rejected() {
        let result = derive_key("passphrase", &SALT_A[..8]);
        assert!(matches!(result, Err(GhostVaultError::EncryptionFailed(_))));
    }

    #[test]
    fn test_key_zeroize() {
        let mut key = derive_key("test_passphrase", &SALT_A).unwrap();
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; KEY_SIZE]);
    }
}
