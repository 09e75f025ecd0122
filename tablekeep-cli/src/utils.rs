//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, store access
//! and argument parsing.

use crate::error::CliError;
use std::path::PathBuf;
use std::time::Duration;
use tablekeep::database::{default_data_dir, DATABASE_FILE_NAME};
use tablekeep::{
    Config, ConfigBuilder, Database, DatabaseConfig, ExecutionResult, ReservationDate,
    ReservationStore,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory.
///
/// Priority: global option (or `TABLEKEEP_DATA_DIR`) > `~/.tablekeep`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project configuration files (`tablekeep.local.yaml`, `tablekeep.yaml`)
/// 3. User configuration (`config.yaml` in the data directory)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled, either by flag or by configuration.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<ReservationStore, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit == Some(true);

    // The command-line timeout wins over the configured lock wait
    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |secs| Duration::from_secs(secs.into()));

    let db = Database::open(
        DatabaseConfig::new(db_path)
            .with_busy_timeout(busy_timeout)
            .with_auto_create(!autoinit_disabled),
    )?;
    Ok(ReservationStore::new(db, config.storage_key()))
}

/// Parse a `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date_or_today(date: Option<&str>) -> Result<ReservationDate, CliError> {
    match date {
        Some(s) => s
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("{e}"))),
        None => Ok(ReservationDate::today()),
    }
}

/// Report the outcome of a save or delete on stderr.
pub fn report_execution(result: &ExecutionResult, global: &GlobalOptions) {
    if global.quiet {
        return;
    }

    if result.dry_run {
        eprintln!("Dry run - would perform the following actions:");
        for (i, action) in result.actions_taken.iter().enumerate() {
            eprintln!("  {}. {action}", i + 1);
        }
    } else if global.verbose {
        for action in &result.actions_taken {
            eprintln!("{action}");
        }
    }

    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }
}
