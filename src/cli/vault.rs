//! Vault CLI commands
//!
//! Seal, open, clear and inspect the vault slot.

use std::sync::Arc;

use clap::Args;

use super::prompt::{passphrase_or_prompt, prompt_new_passphrase, read_note_from_stdin};
use crate::config::{GhostVaultPaths, Settings};
use crate::crypto::{generate_passphrase, SecureString};
use crate::display::format_vault_status;
use crate::error::{GhostVaultError, GhostVaultResult};
use crate::services::VaultService;
use crate::storage::FileStore;

/// Environment variable supplying the passphrase non-interactively
pub const PASSPHRASE_ENV: &str = "GHOSTVAULT_PASSPHRASE";

/// Arguments for `seal`
#[derive(Args, Debug)]
pub struct SealArgs {
    /// Note to seal (read from stdin when omitted)
    pub text: Option<String>,

    /// Generate a random passphrase instead of prompting for one
    #[arg(short, long)]
    pub generate: bool,

    /// Length of the generated passphrase
    #[arg(short, long, requires = "generate")]
    pub length: Option<usize>,

    #[arg(long, env = PASSPHRASE_ENV, hide = true, hide_env_values = true)]
    pub passphrase: Option<String>,
}

/// Arguments for `open`
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Keep the envelope after opening, whatever the configured policy
    #[arg(long, conflicts_with = "burn")]
    pub keep: bool,

    /// Burn the envelope after opening, whatever the configured policy
    #[arg(long)]
    pub burn: bool,

    #[arg(long, env = PASSPHRASE_ENV, hide = true, hide_env_values = true)]
    pub passphrase: Option<String>,
}

impl OpenArgs {
    fn burn_policy(&self, settings: &Settings) -> bool {
        if self.keep {
            false
        } else if self.burn {
            true
        } else {
            settings.burn_after_reading
        }
    }
}

fn open_vault(paths: &GhostVaultPaths, burn: bool) -> GhostVaultResult<Arc<VaultService<FileStore>>> {
    let store = FileStore::from_paths(paths)?;
    Ok(Arc::new(
        VaultService::new(store).with_burn_after_reading(burn),
    ))
}

/// Handle `seal`
pub async fn handle_seal(
    paths: &GhostVaultPaths,
    settings: &Settings,
    args: SealArgs,
) -> GhostVaultResult<()> {
    let note = match args.text {
        Some(text) => text,
        None => read_note_from_stdin()?,
    };
    if note.trim().is_empty() {
        return Err(GhostVaultError::EmptyNote);
    }

    let passphrase = if args.generate {
        let length = args.length.unwrap_or(settings.passphrase_length);
        if length == 0 {
            return Err(GhostVaultError::Validation(
                "Passphrase length must be at least 1".into(),
            ));
        }
        let generated = SecureString::from(generate_passphrase(length));
        println!("Passphrase: {}", generated.as_str());
        generated
    } else {
        match args.passphrase {
            Some(passphrase) => SecureString::from(passphrase),
            None => prompt_new_passphrase()?,
        }
    };

    let vault = open_vault(paths, settings.burn_after_reading)?;
    let replacing = vault.state()?.is_armed();

    eprintln!("Deriving key and sealing...");
    vault.seal_async(note, passphrase).await?;

    if replacing {
        eprintln!("Previous note replaced.");
    }
    eprintln!("Message encrypted & stored in vault.");
    Ok(())
}

/// Handle `open`
pub async fn handle_open(
    paths: &GhostVaultPaths,
    settings: &Settings,
    args: OpenArgs,
) -> GhostVaultResult<()> {
    let vault = open_vault(paths, args.burn_policy(settings))?;
    if !vault.state()?.is_armed() {
        return Err(GhostVaultError::NoVault);
    }

    let passphrase = passphrase_or_prompt(args.passphrase, "Enter passphrase: ")?;
    let opened = vault.open_async(passphrase).await?;

    println!("{}", opened.plaintext);
    if opened.burned {
        eprintln!("Decrypted. Vault cleared (burned).");
    } else {
        eprintln!("Message decrypted.");
    }
    Ok(())
}

/// Handle `clear`
pub fn handle_clear(paths: &GhostVaultPaths) -> GhostVaultResult<()> {
    let vault = open_vault(paths, true)?;
    vault.clear()?;
    println!("Vault cleared.");
    Ok(())
}

/// Handle `status`
pub fn handle_status(paths: &GhostVaultPaths, settings: &Settings) -> GhostVaultResult<()> {
    let vault = open_vault(paths, settings.burn_after_reading)?;
    print!("{}", format_vault_status(&vault.state()?, settings));
    Ok(())
}
