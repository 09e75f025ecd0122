//! Configuration schema definitions.
//!
//! This module defines the configuration structure for tablekeep: the
//! per-slot capacity, opening hours, storage key and output settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::DEFAULT_STORAGE_KEY;
use crate::error::Result;
use crate::slot::capacity::DEFAULT_MAX_TABLES;
use crate::slot::{DEFAULT_CLOSE_MINUTES, DEFAULT_OPEN_MINUTES, DEFAULT_STEP_MINUTES};
use crate::{SlotSchedule, TimeSlot};

/// Lock wait used when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessor methods fill in the built-in defaults.
///
/// # Examples
///
/// ```
/// use tablekeep::config::{Config, HoursConfig};
///
/// let config = Config {
///     max_tables: Some(12),
///     hours: Some(HoursConfig {
///         open: Some("17:00".to_string()),
///         close: Some("23:00".to_string()),
///         step_minutes: Some(15),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.capacity(), 12);
/// assert_eq!(config.schedule().unwrap().len(), 25);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum reservations sharing one date and start time.
    pub max_tables: Option<u32>,

    /// Opening hours and slot step.
    pub hours: Option<HoursConfig>,

    /// Key under which the reservation list is stored.
    pub storage_key: Option<String>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

/// Opening hours.
///
/// `open` and `close` are `HH:MM` strings; the last slot is at or before
/// `close`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HoursConfig {
    /// First bookable time.
    pub open: Option<String>,

    /// Closing time (inclusive).
    pub close: Option<String>,

    /// Minutes between consecutive slots.
    pub step_minutes: Option<u16>,
}

impl Config {
    /// Per-slot capacity, defaulting to 20.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.max_tables.unwrap_or(DEFAULT_MAX_TABLES)
    }

    /// Builds the slot schedule from the configured hours.
    ///
    /// # Errors
    ///
    /// Returns an error if a time does not parse or the hours do not form a
    /// valid schedule.
    pub fn schedule(&self) -> Result<SlotSchedule> {
        let hours = self.hours.clone().unwrap_or_default();
        let open = match hours.open {
            Some(s) => s.parse()?,
            None => TimeSlot::from_minutes(DEFAULT_OPEN_MINUTES)?,
        };
        let close = match hours.close {
            Some(s) => s.parse()?,
            None => TimeSlot::from_minutes(DEFAULT_CLOSE_MINUTES)?,
        };
        let step = hours.step_minutes.unwrap_or(DEFAULT_STEP_MINUTES);
        SlotSchedule::new(open, close, step)
    }

    /// Storage key, defaulting to `reservations:v1`.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// Database busy timeout.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Output format, defaulting to table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Table)
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use tablekeep::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format '{other}' (expected table, json or csv)")),
        }
    }
}
