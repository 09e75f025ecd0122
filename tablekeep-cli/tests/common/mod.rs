//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Booking helpers that return the new reservation id

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A fixed test day.
#[allow(dead_code)]
pub const DAY: &str = "2025-10-01";

/// Variables that would leak the developer's setup into a test run.
const TABLEKEEP_ENV_VARS: &[&str] = &[
    "TABLEKEEP_DATA_DIR",
    "TABLEKEEP_BUSY_TIMEOUT",
    "TABLEKEEP_DISABLE_AUTOINIT",
    "TABLEKEEP_MAX_TABLES",
    "TABLEKEEP_OPEN",
    "TABLEKEEP_CLOSE",
    "TABLEKEEP_SLOT_STEP_MINUTES",
    "TABLEKEEP_STORAGE_KEY",
    "TABLEKEEP_MAXIMUM_LOCK_WAIT_SECONDS",
    "TABLEKEEP_OUTPUT_FORMAT",
    "TABLEKEEP_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// Commands run with the temporary directory as working directory, so
/// project configuration files written with [`TestEnv::write_project_config`]
/// are picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the tablekeep data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; tablekeep creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tablekeep-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablekeep").expect("Failed to find tablekeep binary");
        for var in TABLEKEEP_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `tablekeep.yaml` into the working directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        let path = self.temp_path.join("tablekeep.yaml");
        std::fs::write(&path, contents).expect("Failed to write project config");
        path
    }

    /// Book a reservation and return its id.
    ///
    /// # Panics
    /// Panics if the add command fails.
    pub fn add(&self, name: &str, date: &str, start: &str) -> String {
        self.add_with(name, date, start, &[])
    }

    /// Book a reservation with extra `add` arguments and return its id.
    pub fn add_with(&self, name: &str, date: &str, start: &str, extra: &[&str]) -> String {
        let output = self
            .command()
            .args(["add", "--name", name, "--date", date, "--start", start])
            .args(extra)
            .output()
            .expect("Failed to run add command");

        assert!(
            output.status.success(),
            "Add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Run `list --format json` for a day and parse the result.
    pub fn list_json(&self, date: &str) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--date", date, "--format", "json"])
            .output()
            .expect("Failed to run list command");

        assert!(output.status.success(), "List failed");
        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }
}
