//! Key-value operations on the storage table.
//!
//! These mirror the browser storage calls `getItem`, `setItem`,
//! `removeItem` and key listing. Each call is its own implicit transaction;
//! read-modify-write sequences go through [`Database::with_immediate`].

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{DELETE_ITEM, LIST_KEYS, SELECT_ITEM, UPSERT_ITEM};

/// Current Unix time in seconds, for the `updated_at` column.
#[allow(clippy::cast_possible_wrap)]
fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs() as i64
}

pub(super) fn read_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    Ok(conn
        .query_row(SELECT_ITEM, [key], |row| row.get(0))
        .optional()?)
}

pub(super) fn write_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(UPSERT_ITEM, params![key, value, unix_now()])?;
    Ok(())
}

impl Database {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        read_item(&self.conn, key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        write_item(&self.conn, key, value).map_err(|e| self.map_busy(e))
    }

    /// Removes `key`. Returns `true` if it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_item(&mut self, key: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute(DELETE_ITEM, [key])
            .map_err(|e| self.map_busy(e.into()))?;
        Ok(affected > 0)
    }

    /// Lists every stored key in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(LIST_KEYS)?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }

    /// Runs `f` inside an IMMEDIATE transaction.
    ///
    /// The write lock is taken before `f` reads anything, so two processes
    /// running read-check-write sequences cannot interleave. The
    /// transaction commits if `f` returns `Ok` and rolls back otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the lock is not acquired within the
    /// busy timeout, or whatever error `f` returns.
    pub fn with_immediate<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let timeout = self.config().busy_timeout;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| busy_to_timeout(e.into(), timeout))?;

        let value = f(&tx)?;
        tx.commit().map_err(|e| busy_to_timeout(e.into(), timeout))?;
        Ok(value)
    }

    fn map_busy(&self, err: Error) -> Error {
        busy_to_timeout(err, self.config().busy_timeout)
    }
}

fn busy_to_timeout(err: Error, timeout: Duration) -> Error {
    match err {
        Error::Database(rusqlite::Error::SqliteFailure(ref e, _))
            if matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ) =>
        {
            Error::LockTimeout {
                seconds: timeout.as_secs(),
            }
        }
        other => other,
    }
}
