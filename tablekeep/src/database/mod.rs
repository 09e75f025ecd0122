//! Local key-value storage for reservations.
//!
//! This module provides a SQLite-backed store that behaves like browser
//! local storage: string values under string keys. [`ReservationStore`]
//! keeps the whole reservation list as one JSON array under a single key.
//!
//! # Examples
//!
//! ```no_run
//! use tablekeep::database::{Database, DatabaseConfig, ReservationStore};
//! use tablekeep::{Reservation, ReservationDate, TimeSlot};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/tablekeep.db")).unwrap();
//! let mut store = ReservationStore::new(db, "reservations:v1");
//!
//! let date: ReservationDate = "2025-10-01".parse().unwrap();
//! let start: TimeSlot = "18:00".parse().unwrap();
//! let reservation = Reservation::builder("Ann", date, start).build().unwrap();
//!
//! store.save(&[reservation]).unwrap();
//! for r in store.by_date(date).unwrap() {
//!     println!("{} {}", r.start(), r.name());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod store;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;
pub use store::{ReservationStore, DEFAULT_STORAGE_KEY};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
