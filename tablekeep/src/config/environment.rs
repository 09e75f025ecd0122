//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TABLEKEEP_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Overrides the per-slot capacity.
pub const MAX_TABLES_ENV: &str = "TABLEKEEP_MAX_TABLES";
/// Overrides the opening time.
pub const OPEN_ENV: &str = "TABLEKEEP_OPEN";
/// Overrides the closing time.
pub const CLOSE_ENV: &str = "TABLEKEEP_CLOSE";
/// Overrides the slot step.
pub const STEP_ENV: &str = "TABLEKEEP_SLOT_STEP_MINUTES";
/// Overrides the storage key.
pub const STORAGE_KEY_ENV: &str = "TABLEKEEP_STORAGE_KEY";
/// Overrides the lock wait.
pub const LOCK_WAIT_ENV: &str = "TABLEKEEP_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "TABLEKEEP_OUTPUT_FORMAT";
/// Disables automatic initialization.
pub const DISABLE_AUTOINIT_ENV: &str = "TABLEKEEP_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablekeep::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric capacity, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(MAX_TABLES_ENV) {
            config.max_tables = Some(Self::parse_number(MAX_TABLES_ENV, &val)?);
        }

        Self::apply_hours_overrides(config)?;

        if let Ok(key) = env::var(STORAGE_KEY_ENV) {
            config.storage_key = Some(key);
        }

        if let Ok(val) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds = Some(Self::parse_number(LOCK_WAIT_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format = val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Apply opening-hours overrides.
    ///
    /// Times are kept as strings here and checked by the validator.
    fn apply_hours_overrides(config: &mut Config) -> Result<()> {
        let mut hours = config.hours.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(open) = env::var(OPEN_ENV) {
            hours.open = Some(open);
            modified = true;
        }

        if let Ok(close) = env::var(CLOSE_ENV) {
            hours.close = Some(close);
            modified = true;
        }

        if let Ok(step) = env::var(STEP_ENV) {
            hours.step_minutes = Some(Self::parse_number(STEP_ENV, &step)?);
            modified = true;
        }

        if modified {
            config.hours = Some(hours);
        }

        Ok(())
    }

    fn parse_number<T: std::str::FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
