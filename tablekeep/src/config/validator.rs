//! Configuration validation.
//!
//! Checks each field on its own and then the opening hours as a whole.

use crate::config::schema::{Config, HoursConfig};
use crate::error::{Error, Result};
use crate::slot::MINUTES_PER_DAY;
use crate::TimeSlot;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use tablekeep::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_tables: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.max_tables == Some(0) {
            return Err(Error::Validation {
                field: "max_tables".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if let Some(ref hours) = config.hours {
            Self::validate_hours(hours)?;
        }

        if let Some(ref key) = config.storage_key {
            Self::validate_storage_key(key)?;
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        // Cross-field check: defaults filled in for missing hours
        config.schedule().map_err(|e| Error::Validation {
            field: "hours".into(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn validate_hours(hours: &HoursConfig) -> Result<()> {
        for (field, value) in [("hours.open", &hours.open), ("hours.close", &hours.close)] {
            if let Some(value) = value {
                value.parse::<TimeSlot>().map_err(|e| Error::Validation {
                    field: field.into(),
                    message: e.to_string(),
                })?;
            }
        }

        if let Some(step) = hours.step_minutes {
            if step == 0 || step > MINUTES_PER_DAY {
                return Err(Error::Validation {
                    field: "hours.step_minutes".into(),
                    message: format!("Must be between 1 and {MINUTES_PER_DAY}, got {step}"),
                });
            }
        }

        Ok(())
    }

    /// Checks that the storage key is non-empty, has no null bytes and is
    /// at most 255 characters.
    fn validate_storage_key(key: &str) -> Result<()> {
        let message = if key.trim().is_empty() {
            "Cannot be empty or only whitespace"
        } else if key.contains('\0') {
            "Cannot contain null bytes"
        } else if key.len() > 255 {
            "Cannot exceed 255 characters"
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            field: "storage_key".into(),
            message: message.into(),
        })
    }
}
