//! Settings and utility CLI commands

use clap::ValueEnum;

use crate::config::{GhostVaultPaths, Settings};
use crate::crypto::generate_passphrase;
use crate::display::format_config;
use crate::error::{GhostVaultError, GhostVaultResult};

/// On/off switch for `burn`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Handle `burn on|off`
pub fn handle_burn(
    paths: &GhostVaultPaths,
    settings: &mut Settings,
    toggle: Toggle,
) -> GhostVaultResult<()> {
    settings.burn_after_reading = toggle == Toggle::On;
    settings.save(paths)?;

    if settings.burn_after_reading {
        println!("Burn after reading enabled: notes are destroyed once opened.");
    } else {
        println!("Burn after reading disabled: notes stay sealed after opening.");
    }
    Ok(())
}

/// Handle `generate`
pub fn handle_generate(settings: &Settings, length: Option<usize>) -> GhostVaultResult<()> {
    let length = length.unwrap_or(settings.passphrase_length);
    if length == 0 {
        return Err(GhostVaultError::Validation(
            "Passphrase length must be at least 1".into(),
        ));
    }
    println!("{}", generate_passphrase(length));
    Ok(())
}

/// Handle `config`
pub fn handle_config(paths: &GhostVaultPaths, settings: &Settings) -> GhostVaultResult<()> {
    print!("{}", format_config(paths, settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_burn_toggle_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GhostVaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_burn(&paths, &mut settings, Toggle::Off).unwrap();
        assert!(!Settings::load_or_create(&paths).unwrap().burn_after_reading);

        handle_burn(&paths, &mut settings, Toggle::On).unwrap();
        assert!(Settings::load_or_create(&paths).unwrap().burn_after_reading);
    }

    #[test]
    fn test_generate_rejects_zero_length() {
        let err = handle_generate(&Settings::default(), Some(0)).unwrap_err();
        assert!(err.is_validation());
    }
}
