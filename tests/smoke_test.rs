//! Smoke tests for the tfcopen CLI.
//!
//! These tests verify basic CLI plumbing:
//! - `tfcopen --version` / `-v` outputs the version
//! - `tfcopen --help` outputs help text

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the tfcopen binary.
fn tfcopen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tfcopen"))
}

#[test]
fn test_version_flag() {
    tfcopen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag_short() {
    tfcopen()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag_skips_config_discovery() {
    // Version must exit cleanly even where discovery would fail.
    let dir = tempfile::tempdir().unwrap();
    tfcopen()
        .current_dir(dir.path())
        .env_remove("TFCOPEN_DEFAULT_ORG")
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_help_flag() {
    tfcopen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--registry"));
}

#[test]
fn test_help_flag_short() {
    tfcopen()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_flag() {
    tfcopen()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
