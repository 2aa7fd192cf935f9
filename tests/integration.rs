// Integration tests for the cropwise CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the cropwise binary.
fn cropwise() -> Command {
    Command::cargo_bin("cropwise").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    cropwise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cropwise"));
}

#[test]
fn cli_help_flag() {
    cropwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crop suitability scoring"));
}

#[test]
fn suggest_requires_field_arguments() {
    cropwise()
        .arg("suggest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn fertilizer_requires_crop_and_soil() {
    cropwise()
        .args(["fertilizer", "--crop", "Rice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_are_mutually_exclusive() {
    cropwise()
        .args(["-v", "-q", "reprocess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
