use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use ghostvault::crypto::{decrypt, encrypt, Envelope, PASSPHRASE_ALPHABET};

fn ghostvault(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ghostvault").unwrap();
    cmd.env("GHOSTVAULT_DATA_DIR", dir)
        .env_remove("GHOSTVAULT_PASSPHRASE")
        .env_remove("GHOSTVAULT_LOG");
    cmd
}

fn vault_file(dir: &Path) -> std::path::PathBuf {
    dir.join("data").join("vaultData.json")
}

fn seal(dir: &Path, note: &str, passphrase: &str) {
    ghostvault(dir)
        .args(["seal", note])
        .env("GHOSTVAULT_PASSPHRASE", passphrase)
        .assert()
        .success()
        .stderr(predicate::str::contains("stored in vault"));
}

#[test]
fn status_of_fresh_vault_is_empty() {
    let dir = TempDir::new().unwrap();

    ghostvault(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("EMPTY"));
}

#[test]
fn seal_then_open_burns_by_default() {
    let dir = TempDir::new().unwrap();
    seal(dir.path(), "hello world", "correct-horse");

    ghostvault(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("ARMED"));

    ghostvault(dir.path())
        .arg("open")
        .env("GHOSTVAULT_PASSPHRASE", "correct-horse")
        .assert()
        .success()
        .stdout("hello world\n")
        .stderr(predicate::str::contains("burned"));

    assert!(!vault_file(dir.path()).exists());
    ghostvault(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("EMPTY"));
}

#[test]
fn wrong_passphrase_fails_and_keeps_note() {
    let dir = TempDir::new().unwrap();
    seal(dir.path(), "hello world", "correct-horse");
    let before = fs::read_to_string(vault_file(dir.path())).unwrap();

    ghostvault(dir.path())
        .arg("open")
        .env("GHOSTVAULT_PASSPHRASE", "wrong-pass")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid passphrase or corrupted data."));

    let after = fs::read_to_string(vault_file(dir.path())).unwrap();
    assert_eq!(before, after);
}

#[test]
fn open_keep_leaves_envelope_in_place() {
    let dir = TempDir::new().unwrap();
    seal(dir.path(), "keep me", "pass");

    ghostvault(dir.path())
        .args(["open", "--keep"])
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .assert()
        .success()
        .stdout("keep me\n");

    assert!(vault_file(dir.path()).exists());
}

#[test]
fn burn_off_is_persisted() {
    let dir = TempDir::new().unwrap();

    ghostvault(dir.path())
        .args(["burn", "off"])
        .assert()
        .success();
    seal(dir.path(), "sticky", "pass");

    for _ in 0..2 {
        ghostvault(dir.path())
            .arg("open")
            .env("GHOSTVAULT_PASSPHRASE", "pass")
            .assert()
            .success()
            .stdout("sticky\n");
    }

    // --burn overrides the stored preference
    ghostvault(dir.path())
        .args(["open", "--burn"])
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .assert()
        .success();
    assert!(!vault_file(dir.path()).exists());
}

#[test]
fn open_empty_vault_fails() {
    let dir = TempDir::new().unwrap();

    ghostvault(dir.path())
        .arg("open")
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault data found."));
}

#[test]
fn seal_reads_stdin() {
    let dir = TempDir::new().unwrap();

    ghostvault(dir.path())
        .arg("seal")
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .write_stdin("line one\nline two\n")
        .assert()
        .success();

    ghostvault(dir.path())
        .arg("open")
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .assert()
        .success()
        .stdout("line one\nline two\n");
}

#[test]
fn seal_rejects_blank_note() {
    let dir = TempDir::new().unwrap();

    ghostvault(dir.path())
        .args(["seal", "   "])
        .env("GHOSTVAULT_PASSPHRASE", "pass")
        .assert()
        .failure();

    assert!(!vault_file(dir.path()).exists());
}

#[test]
fn seal_with_generated_passphrase() {
    let dir = TempDir::new().unwrap();

    let output = ghostvault(dir.path())
        .args(["seal", "generated", "--generate", "--length", "24"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let passphrase = stdout
        .trim_end()
        .strip_prefix("Passphrase: ")
        .unwrap()
        .to_string();
    assert_eq!(passphrase.len(), 24);

    ghostvault(dir.path())
        .arg("open")
        .env("GHOSTVAULT_PASSPHRASE", &passphrase)
        .assert()
        .success()
        .stdout("generated\n");
}

#[test]
fn clear_destroys_note() {
    let dir = TempDir::new().unwrap();
    seal(dir.path(), "doomed", "pass");

    ghostvault(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault cleared."));

    assert!(!vault_file(dir.path()).exists());
}

#[test]
fn generate_prints_passphrase_from_alphabet() {
    let dir = TempDir::new().unwrap();

    let output = ghostvault(dir.path())
        .args(["generate", "--length", "40"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let passphrase = String::from_utf8(output).unwrap();
    let passphrase = passphrase.trim_end_matches('\n');

    assert_eq!(passphrase.len(), 40);
    assert!(passphrase.bytes().all(|b| PASSPHRASE_ALPHABET.contains(&b)));
}

#[test]
fn envelope_written_by_other_tools_opens() {
    let dir = TempDir::new().unwrap();
    let envelope = encrypt("from a companion tool", "shared").unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(vault_file(dir.path()), envelope.to_json().unwrap()).unwrap();

    ghostvault(dir.path())
        .args(["open", "--keep"])
        .env("GHOSTVAULT_PASSPHRASE", "shared")
        .assert()
        .success()
        .stdout("from a companion tool\n");
}

#[test]
fn envelope_written_by_cli_decodes_with_library() {
    let dir = TempDir::new().unwrap();
    seal(dir.path(), "round trip", "shared");

    let raw = fs::read_to_string(vault_file(dir.path())).unwrap();
    let envelope = Envelope::parse(&raw).unwrap();
    assert_eq!(decrypt(&envelope, "shared").unwrap(), "round trip");
}

#[test]
fn malformed_slot_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(vault_file(dir.path()), r#"{"v":2,"salt":"AA==","iv":"AA==","cipher":"AA=="}"#).unwrap();

    ghostvault(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("EMPTY"));
}
