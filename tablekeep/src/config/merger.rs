//! Configuration merging and precedence handling.
//!
//! Scalar fields are replaced by higher-precedence sources; the `hours`
//! section merges field by field so a file may override only `close`.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, HoursConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tablekeep::config::{Config, ConfigMerger};
///
/// let low = Config { max_tables: Some(20), ..Default::default() };
/// let high = Config { max_tables: Some(8), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_tables, Some(8));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_tables.is_some() {
            target.max_tables = source.max_tables;
        }

        if source.storage_key.is_some() {
            target.storage_key.clone_from(&source.storage_key);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if let Some(ref source_hours) = source.hours {
            target.hours = Some(match &target.hours {
                Some(target_hours) => Self::merge_hours(target_hours, source_hours),
                None => source_hours.clone(),
            });
        }
    }

    fn merge_hours(target: &HoursConfig, source: &HoursConfig) -> HoursConfig {
        HoursConfig {
            open: source.open.clone().or_else(|| target.open.clone()),
            close: source.close.clone().or_else(|| target.close.clone()),
            step_minutes: source.step_minutes.or(target.step_minutes),
        }
    }
}
