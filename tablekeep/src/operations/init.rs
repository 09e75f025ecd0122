//! Data directory initialization.
//!
//! Creates the data directory and database, optionally writes a commented
//! configuration template and seeds the sample reservation.

use std::fs;
use std::path::PathBuf;

use crate::database::{ReservationStore, DATABASE_FILE_NAME, DEFAULT_STORAGE_KEY};
use crate::error::{Error, Result};
use crate::operations::seed::seed_sample_if_empty;
use crate::{Database, DatabaseConfig, ReservationDate, SlotSchedule};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
    /// Seed the sample reservation into the new store.
    pub seed_sample: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
    /// Key the reservation list is stored under.
    pub storage_key: String,
    /// Date given to the sample reservation.
    pub today: ReservationDate,
    /// Opening hours the sample reservation must fit.
    pub schedule: SlotSchedule,
}

impl InitOptions {
    /// Creates new initialization options.
    ///
    /// The sample reservation is seeded for today unless disabled.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            seed_sample: true,
            dry_run: false,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            today: ReservationDate::today(),
            schedule: SlotSchedule::default(),
        }
    }

    /// Sets whether to overwrite existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets whether to seed the sample reservation.
    #[must_use]
    pub const fn with_seed_sample(mut self, seed: bool) -> Self {
        self.seed_sample = seed;
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the date of the sample reservation.
    #[must_use]
    pub const fn with_today(mut self, today: ReservationDate) -> Self {
        self.today = today;
        self
    }

    /// Sets the opening hours used to place the sample reservation.
    #[must_use]
    pub const fn with_schedule(mut self, schedule: SlotSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

/// Result of initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was (or would be) created.
    pub data_dir_created: bool,
    /// Whether the database was (or would be) created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was (or would be) created.
    pub config_created: bool,
    /// Whether the sample reservation was (or would be) written.
    pub sample_seeded: bool,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tablekeep configuration file
# Values below are the built-in defaults.

# Maximum reservations sharing one date and start time
# max_tables: 20

# Opening hours; the last slot starts at or before close
# hours:
#   open: "10:00"
#   close: "22:00"
#   step_minutes: 30

# Key the reservation list is stored under
# storage_key: "reservations:v1"

# Maximum lock wait time in seconds
# maximum_lock_wait_seconds: 5

# Default format for `list`: table, json or csv
# output_format: table
"#;

/// Initializes the tablekeep data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be initialized or seeded
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists
///
/// # Examples
///
/// ```no_run
/// use tablekeep::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/tablekeep-test"))
///     .with_create_config(true)
///     .with_seed_sample(false);
///
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let config_path = options.data_dir.join(crate::config::loader::USER_CONFIG_FILE);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    let mut result = InitResult {
        data_dir_created: !options.data_dir.exists(),
        database_created: true,
        config_created: options.create_config && !config_path.exists(),
        sample_seeded: options.seed_sample,
        dry_run: options.dry_run,
        data_dir: options.data_dir.clone(),
    };

    if options.dry_run {
        return Ok(result);
    }

    if result.data_dir_created {
        fs::create_dir_all(&options.data_dir)?;
    }

    if db_exists {
        fs::remove_file(&db_path)?;
        // WAL side files belong to the old database
        for suffix in ["-wal", "-shm"] {
            let side = options.data_dir.join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if side.exists() {
                fs::remove_file(side)?;
            }
        }
    }

    let db = Database::open(DatabaseConfig::new(&db_path))?;
    log::debug!("created database at {}", db_path.display());

    if options.seed_sample {
        let mut store = ReservationStore::new(db, options.storage_key.clone());
        result.sample_seeded = seed_sample_if_empty(&mut store, options.today, &options.schedule)?;
    }

    if result.config_created {
        fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(data_dir: &std::path::Path) -> ReservationStore {
        let db = Database::open(DatabaseConfig::new(data_dir.join(DATABASE_FILE_NAME))).unwrap();
        ReservationStore::new(db, DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");

        let options = InitOptions::new(data_dir.clone())
            .with_today("2025-10-01".parse().unwrap());
        let result = init_database(&options).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(result.sample_seeded);
        assert!(data_dir.join(DATABASE_FILE_NAME).exists());

        let all = open_store(&data_dir).all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "Sample Customer");
        assert_eq!(all[0].date().to_string(), "2025-10-01");
    }

    #[test]
    fn test_init_without_sample() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path().to_path_buf()).with_seed_sample(false);
        let result = init_database(&options).unwrap();

        assert!(!result.data_dir_created);
        assert!(!result.sample_seeded);
        assert!(open_store(temp.path()).all().unwrap().is_empty());
    }

    #[test]
    fn test_init_with_config() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");

        let options = InitOptions::new(data_dir.clone()).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(result.config_created);
        let content = fs::read_to_string(data_dir.join("config.yaml")).unwrap();
        assert!(content.contains("tablekeep configuration file"));

        // The template is all comments and must load as an empty config
        let parsed = crate::config::ConfigLoader::load_file(&data_dir.join("config.yaml"));
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_init_fails_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");
        init_database(&InitOptions::new(data_dir.clone())).unwrap();

        match init_database(&InitOptions::new(data_dir)) {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "database");
                assert!(message.contains("already exists"));
                assert!(message.contains("--overwrite"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_with_overwrite_starts_empty() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");
        init_database(&InitOptions::new(data_dir.clone())).unwrap();

        let options = InitOptions::new(data_dir.clone())
            .with_overwrite(true)
            .with_seed_sample(false);
        let result = init_database(&options).unwrap();

        assert!(!result.data_dir_created);
        assert!(result.database_created);
        assert!(open_store(&data_dir).all().unwrap().is_empty());
    }

    #[test]
    fn test_init_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");

        let options = InitOptions::new(data_dir.clone())
            .with_create_config(true)
            .with_dry_run(true);
        let result = init_database(&options).unwrap();

        assert!(result.dry_run);
        assert!(result.data_dir_created);
        assert!(result.config_created);
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_init_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("tablekeep");
        fs::create_dir_all(&data_dir).unwrap();
        let config_path = data_dir.join("config.yaml");
        fs::write(&config_path, "max_tables: 4\n").unwrap();

        let options = InitOptions::new(data_dir).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(!result.config_created);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "max_tables: 4\n");
    }
}
