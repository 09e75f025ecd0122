//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the tablekeep library.

use std::path::{Path, PathBuf};

use tablekeep::config::{Config, ConfigBuilder};
use tablekeep::database::{Database, DatabaseConfig, ReservationStore, DEFAULT_STORAGE_KEY};
use tablekeep::Reservation;

/// Opens (creating if needed) the database file at `path`.
#[allow(dead_code)]
pub fn open_database(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Opens a store over the database file at `path` using the default key.
#[allow(dead_code)]
pub fn open_store(path: &Path) -> ReservationStore {
    ReservationStore::new(open_database(path), DEFAULT_STORAGE_KEY)
}

/// Creates a temporary directory and returns it with a database path inside.
///
/// Keep the `TempDir` alive for as long as the database is used.
#[allow(dead_code)]
pub fn temp_database_path() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tablekeep.db");
    (dir, path)
}

/// A configuration from defaults only, with the given capacity.
#[allow(dead_code)]
pub fn config_with_capacity(capacity: u32) -> Config {
    ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            max_tables: Some(capacity),
            ..Config::default()
        })
        .build()
        .unwrap()
}

/// Builder for creating test reservations with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ReservationFixture;
/// let reservation = ReservationFixture::new()
///     .with_name("Ada")
///     .with_start("19:30")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ReservationFixture {
    name: String,
    date: String,
    start: String,
    party_size: u32,
    phone: String,
    notes: String,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - name: "Test Guest"
    /// - date: "2025-10-01"
    /// - start: "18:00"
    /// - party size: 2
    pub fn new() -> Self {
        Self {
            name: "Test Guest".to_string(),
            date: "2025-10-01".to_string(),
            start: "18:00".to_string(),
            party_size: 2,
            phone: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_start(mut self, start: &str) -> Self {
        self.start = start.to_string();
        self
    }

    pub fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    pub fn build(self) -> Reservation {
        Reservation::builder(self.name, self.date.parse().unwrap(), self.start.parse().unwrap())
            .party_size(self.party_size)
            .phone(self.phone)
            .notes(self.notes)
            .build()
            .unwrap()
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}
