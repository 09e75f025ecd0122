//! Configuration system for tablekeep.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and location files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of capacity, hours and storage settings
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEKEEP_*`)
//! 3. Private location config (`tablekeep.local.yaml`)
//! 4. Location config (`tablekeep.yaml`)
//! 5. User config (`~/.tablekeep/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tablekeep::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("{} tables per slot", config.capacity());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, HoursConfig, OutputFormat};
pub use validator::ConfigValidator;
