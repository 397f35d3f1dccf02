//! End-to-end tests for the canopy binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn canopy() -> Command {
    Command::cargo_bin("canopy").unwrap()
}

#[test]
fn help_lists_subcommands() {
    canopy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_package() {
    canopy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_shows_usage() {
    canopy().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn check_outside_a_rails_root_fails() {
    let temp = TempDir::new().unwrap();

    canopy()
        .arg("check")
        .arg("--project")
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not look like the root"));
}

#[test]
fn install_requires_a_source_argument() {
    canopy().arg("install").assert().failure();
}

#[test]
fn install_with_missing_source_fails_cleanly() {
    let temp = TempDir::new().unwrap();

    canopy()
        .arg("install")
        .arg("--project")
        .arg(temp.path())
        .arg("--source")
        .arg(temp.path().join("no-such-theme"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not a directory"));
}

#[test]
fn completions_emit_shell_script() {
    canopy()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canopy"));
}
