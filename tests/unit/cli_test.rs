//! Integration tests for the cardcheck CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run cardcheck with HOME pointed at an empty directory so no user config
/// leaks into the test
fn cardcheck(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("cardcheck"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cardcheck"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luhn checksum"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    cardcheck(&home).assert().success().stdout(predicate::str::contains("cardcheck v"));
}

#[test]
fn test_validate_valid_number_is_masked() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["validate", "4111-1111-1111-1111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VALID"))
        .stdout(predicate::str::contains("411111******1111"))
        .stdout(predicate::str::contains("visa"))
        .stdout(predicate::str::contains("4111111111111111").not());
}

#[test]
fn test_validate_reveal() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["--reveal", "validate", "4111111111111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4111111111111111"));
}

#[test]
fn test_validate_invalid_number_fails() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["validate", "4111111111111111", "4007000200027"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("INVALID"))
        .stdout(predicate::str::contains("looks like visa"))
        .stdout(predicate::str::contains("1 of 2 card number(s) invalid"))
        .stderr(predicate::str::contains("1 invalid card number(s)"));
}

#[test]
fn test_validate_json() {
    let home = TempDir::new().unwrap();
    let output = cardcheck(&home)
        .args(["--json", "validate", "5105105125105100"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["cards"][0]["status"], "bad_checksum");
    assert_eq!(json["cards"][0]["issuer"], "");
    assert_eq!(json["cards"][0]["matched_scheme"], "mastercard");
}

#[test]
fn test_validate_reads_stdin() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("validate")
        .write_stdin("4111111111111111\n\n  5105105105105100  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 card number(s) valid."));
}

#[test]
fn test_validate_empty_stdin_fails() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("validate")
        .write_stdin("\n   \n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No card numbers given."))
        .stderr(predicate::str::contains("no card numbers to validate"));
}

#[test]
fn test_issuer_valid() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["issuer", "5105105105105100"])
        .assert()
        .success()
        .stdout("mastercard\n");
}

#[test]
fn test_issuer_invalid_is_empty() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["issuer", "5105105125105100"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_schemes_lists_in_order() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("schemes")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. visa"))
        .stdout(predicate::str::contains("6. jcb"));
}

#[test]
fn test_config_file_enables_json() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".cardcheck");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\njson = true\n").unwrap();

    cardcheck(&home)
        .args(["issuer", "4111111111111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"issuer\": \"visa\""))
        .stdout(predicate::str::contains("411111******1111"));
}

#[test]
fn test_config_file_disables_mask() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".cardcheck");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\nmask = false\n").unwrap();

    cardcheck(&home)
        .args(["validate", "4111111111111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4111111111111111"));
}

#[test]
fn test_config_init_creates_file() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(home.path().join(".cardcheck/config.toml")).unwrap();
    assert!(content.contains("mask = true"));

    cardcheck(&home)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show() {
    let home = TempDir::new().unwrap();
    cardcheck(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output.mask = true"));
}
