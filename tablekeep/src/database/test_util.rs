//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig, ReservationStore, DEFAULT_STORAGE_KEY};
use crate::Reservation;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a store over a temporary database using the default key.
#[must_use]
pub fn create_test_store() -> ReservationStore {
    ReservationStore::new(create_test_database(), DEFAULT_STORAGE_KEY)
}

/// Creates a test reservation with the given name, date and start.
///
/// # Panics
///
/// Panics if the date, start or reservation cannot be created.
#[must_use]
pub fn create_test_reservation(name: &str, date: &str, start: &str) -> Reservation {
    Reservation::builder(name, date.parse().unwrap(), start.parse().unwrap())
        .build()
        .unwrap()
}
