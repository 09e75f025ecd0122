//! Integration tests for the tablekeep CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tablekeep"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists every command.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");

    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for command in [
        "init",
        "add",
        "edit",
        "delete",
        "show",
        "list",
        "slots",
        "availability",
        "export",
        "report",
        "validate",
        "completions",
    ] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

/// Test that an unknown subcommand is rejected.
#[test]
fn test_cli_unknown_command() {
    let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");

    cmd.arg("reserve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that completions are generated for bash.
#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tablekeep"))
        .stdout(predicate::str::contains("availability"));
}
