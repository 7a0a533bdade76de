//! Vault status formatting
//!
//! Formats the vault slot and settings for terminal output.

use crate::config::{GhostVaultPaths, Settings};
use crate::crypto::PBKDF2_ITERATIONS;
use crate::services::VaultState;

/// Format the current vault state
pub fn format_vault_status(state: &VaultState, settings: &Settings) -> String {
    let burn = if settings.burn_after_reading { "on" } else { "off" };

    let mut output = String::new();
    output.push_str("Vault Status\n");
    output.push_str("============\n");

    match state {
        VaultState::Empty => {
            output.push_str(&format!("{:<20} {}\n", "State:", "EMPTY"));
        }
        VaultState::Armed(envelope) => {
            output.push_str(&format!("{:<20} {}\n", "State:", "ARMED"));

            let sealed_at = envelope
                .sealed_at()
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            output.push_str(&format!("{:<20} {}\n", "Sealed at:", sealed_at));

            if let Some(len) = envelope.ciphertext_len() {
                output.push_str(&format!("{:<20} {} bytes\n", "Ciphertext:", len));
            }
            output.push_str(&format!("{:<20} {}\n", "Envelope version:", envelope.version));
        }
    }

    output.push_str(&format!("{:<20} {}\n", "Burn after reading:", burn));
    output
}

/// Format paths and settings for the `config` command
pub fn format_config(paths: &GhostVaultPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("GhostVault Configuration\n");
    output.push_str("========================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Data directory:   {}\n", paths.data_dir().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Burn after reading:  {}\n", settings.burn_after_reading));
    output.push_str(&format!("  Passphrase length:   {}\n", settings.passphrase_length));
    output.push_str(&format!(
        "  Key derivation:      PBKDF2-HMAC-SHA256, {} iterations\n",
        PBKDF2_ITERATIONS
    ));
    output.push_str("  Cipher:              AES-256-GCM\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Envelope;
    use std::path::PathBuf;

    fn armed() -> VaultState {
        VaultState::Armed(Envelope {
            version: 1,
            salt: "AAAAAAAAAAAAAAAAAAAAAA==".into(),
            nonce: "AAAAAAAAAAAAAAAA".into(),
            ciphertext: "AAAAAAAAAAAAAAAAAAAAAAAA".into(),
            timestamp: 1_700_000_000_000,
        })
    }

    #[test]
    fn test_empty_status() {
        let output = format_vault_status(&VaultState::Empty, &Settings::default());
        assert!(output.contains("EMPTY"));
        assert!(output.contains("Burn after reading:  on"));
        assert!(!output.contains("Sealed at"));
    }

    #[test]
    fn test_armed_status() {
        let settings = Settings {
            burn_after_reading: false,
            ..Settings::default()
        };
        let output = format_vault_status(&armed(), &settings);
        assert!(output.contains("ARMED"));
        assert!(output.contains("2023-11-14 22:13:20 UTC"));
        assert!(output.contains("18 bytes"));
        assert!(output.contains("off"));
    }

    #[test]
    fn test_config_output() {
        let paths = GhostVaultPaths::with_base_dir(PathBuf::from("/tmp/gv"));
        let output = format_config(&paths, &Settings::default());
        assert!(output.contains("/tmp/gv"));
        assert!(output.contains("250000 iterations"));
    }
}
