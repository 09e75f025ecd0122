//! The reservation list stored as one JSON array under one key.

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::{Reservation, ReservationDate, ReservationId};

use super::connection::Database;
use super::operations::{read_item, write_item};

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "reservations:v1";

/// Access to the reservation list.
///
/// Every read deserializes the whole array and every write replaces it.
/// There is no secondary index; queries are full scans in stored order.
#[derive(Debug)]
pub struct ReservationStore {
    db: Database,
    key: String,
}

fn decode(key: &str, raw: Option<String>) -> Result<Vec<Reservation>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| Error::DatabaseCorruption {
        details: format!("value under '{key}' is not a reservation list: {e}"),
    })
}

fn load(conn: &Connection, key: &str) -> Result<Vec<Reservation>> {
    decode(key, read_item(conn, key)?)
}

fn persist(conn: &Connection, key: &str, reservations: &[Reservation]) -> Result<()> {
    let json = serde_json::to_string(reservations)?;
    write_item(conn, key, &json)
}

impl ReservationStore {
    /// Wraps an open database, keeping reservations under `key`.
    #[must_use]
    pub fn new(db: Database, key: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Loads every reservation in stored order.
    ///
    /// A key that has never been written reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if the stored value is not a
    /// reservation array, or a database error if the read fails.
    pub fn all(&self) -> Result<Vec<Reservation>> {
        load(self.db.connection(), &self.key)
    }

    /// Replaces the stored list with `reservations`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&mut self, reservations: &[Reservation]) -> Result<()> {
        let key = self.key.clone();
        self.db
            .with_immediate(|conn| persist(conn, &key, reservations))?;
        log::debug!("saved {} reservations under '{}'", reservations.len(), self.key);
        Ok(())
    }

    /// Returns the reservations on `date`, ordered by start time.
    ///
    /// Reservations sharing a start keep their stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub fn by_date(&self, date: ReservationDate) -> Result<Vec<Reservation>> {
        let mut day: Vec<Reservation> = self
            .all()?
            .into_iter()
            .filter(|r| r.date() == date)
            .collect();
        day.sort_by_key(Reservation::start);
        Ok(day)
    }

    /// Looks up one reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be loaded.
    pub fn find(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Ok(self.all()?.into_iter().find(|r| r.id() == id))
    }

    /// Applies `f` to the stored list under one IMMEDIATE transaction.
    ///
    /// The list is written back only if `f` changed it. If `f` fails,
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if another writer holds the database
    /// past the busy timeout, or the error returned by `f`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tablekeep::database::{Database, DatabaseConfig, ReservationStore};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/tablekeep.db")).unwrap();
    /// let mut store = ReservationStore::new(db, "reservations:v1");
    ///
    /// let removed = store
    ///     .modify(|list| {
    ///         let before = list.len();
    ///         list.retain(|r| r.name() != "Walk-in");
    ///         Ok(before - list.len())
    ///     })
    ///     .unwrap();
    /// println!("removed {removed}");
    /// ```
    pub fn modify<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Reservation>) -> Result<T>,
    {
        let key = self.key.clone();
        self.db.with_immediate(|conn| {
            let original = load(conn, &key)?;
            let mut working = original.clone();
            let value = f(&mut working)?;

            if working == original {
                log::debug!("reservation list under '{key}' unchanged");
            } else {
                persist(conn, &key, &working)?;
                log::debug!(
                    "rewrote '{key}': {} -> {} reservations",
                    original.len(),
                    working.len()
                );
            }
            Ok(value)
        })
    }

    /// Consumes the store and returns the database.
    #[must_use]
    pub fn into_database(self) -> Database {
        self.db
    }
}
