//! Builder that assembles the final configuration.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, HoursConfig, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS};
use crate::config::validator::ConfigValidator;
use crate::database::DEFAULT_STORAGE_KEY;
use crate::error::Result;
use crate::slot::capacity::DEFAULT_MAX_TABLES;
use crate::slot::{DEFAULT_CLOSE_MINUTES, DEFAULT_OPEN_MINUTES, DEFAULT_STEP_MINUTES};
use crate::TimeSlot;

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// # Examples
///
/// ```
/// use tablekeep::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_tables: Some(6), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.capacity(), 6);
/// assert_eq!(config.storage_key(), "reservations:v1");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start the search for `tablekeep.yaml` from.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Data directory holding the user `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignores all configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `TABLEKEEP_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override with the highest precedence.
    ///
    /// Later overrides win over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// The built-in defaults, with every field set.
    #[must_use]
    pub fn defaults() -> Config {
        let time = |minutes| TimeSlot::from_minutes(minutes).map(|t| t.to_string()).ok();
        Config {
            max_tables: Some(DEFAULT_MAX_TABLES),
            hours: Some(HoursConfig {
                open: time(DEFAULT_OPEN_MINUTES),
                close: time(DEFAULT_CLOSE_MINUTES),
                step_minutes: Some(DEFAULT_STEP_MINUTES),
            }),
            storage_key: Some(DEFAULT_STORAGE_KEY.to_string()),
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            output_format: Some(OutputFormat::Table),
            disable_autoinit: Some(false),
        }
    }

    /// Loads, merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = vec![ConfigSource {
            path: PathBuf::from("<defaults>"),
            precedence: 0,
            config: Self::defaults(),
        }];

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(
                &working_dir,
                self.data_dir.as_deref(),
            )?);
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
