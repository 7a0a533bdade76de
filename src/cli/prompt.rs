//! Terminal input helpers
//!
//! Passphrases are read with echo disabled and handed around as
//! [`SecureString`] so they are wiped once the command finishes.

use std::io::Read;

use crate::crypto::SecureString;
use crate::error::{GhostVaultError, GhostVaultResult};

/// Prompt for a passphrase (hidden input)
pub fn prompt_passphrase(prompt: &str) -> GhostVaultResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| GhostVaultError::Io(format!("Failed to read passphrase: {}", e)))
}

/// Prompt for a new passphrase with confirmation
pub fn prompt_new_passphrase() -> GhostVaultResult<SecureString> {
    loop {
        let pass1 = prompt_passphrase("Enter passphrase: ")?;

        if pass1.is_empty() {
            eprintln!("Passphrase cannot be empty. Please try again.");
            continue;
        }

        let pass2 = prompt_passphrase("Confirm passphrase: ")?;

        if pass1 != pass2 {
            eprintln!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}

/// Use the supplied passphrase if there is one, otherwise prompt
pub fn passphrase_or_prompt(supplied: Option<String>, prompt: &str) -> GhostVaultResult<SecureString> {
    match supplied {
        Some(passphrase) => Ok(SecureString::from(passphrase)),
        None => prompt_passphrase(prompt),
    }
}

/// Read the note body from stdin
pub fn read_note_from_stdin() -> GhostVaultResult<String> {
    let mut note = String::new();
    std::io::stdin()
        .read_to_string(&mut note)
        .map_err(|e| GhostVaultError::Io(format!("Failed to read note from stdin: {}", e)))?;
    Ok(strip_trailing_newline(note))
}

/// Drop the single line terminator an editor or `echo` leaves behind
fn strip_trailing_newline(mut note: String) -> String {
    if note.ends_with('\n') {
        note.pop();
        if note.ends_with('\r') {
            note.pop();
        }
    }
    note
}
