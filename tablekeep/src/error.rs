//! Error types for the tablekeep library.
//!
//! This module provides the error hierarchy for all operations in the
//! tablekeep library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tablekeep error.
///
/// # Examples
///
/// ```
/// use tablekeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(20)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablekeep library.
///
/// The variants for missing fields, full slots and empty exports render the
/// exact messages shown to the person at the front desk.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid time of day was provided.
    #[error("invalid time slot '{value}': {reason}")]
    InvalidSlot {
        /// The rejected input.
        value: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// An invalid calendar date was provided.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// Opening hours that cannot produce a schedule.
    #[error("invalid schedule {open}-{close} every {step} min: {reason}")]
    InvalidSchedule {
        /// Opening time.
        open: String,
        /// Closing time.
        close: String,
        /// Step between slots, in minutes.
        step: u16,
        /// The reason the schedule is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Stored reservation data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV output could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// One or more required form fields were left empty.
    #[error("Please fill required fields.")]
    MissingRequiredFields {
        /// Names of the empty fields.
        fields: Vec<String>,
    },

    /// The target slot already holds `capacity` reservations.
    #[error("That time slot is full (max {capacity} reservations). Choose another time.")]
    SlotFull {
        /// Date of the full slot.
        date: String,
        /// Start time of the full slot.
        start: String,
        /// Configured per-slot capacity.
        capacity: u32,
    },

    /// The start time is not one of the generated slots.
    #[error("{start} is not a bookable time (open {open}-{close})")]
    SlotNotOffered {
        /// The requested start time.
        start: String,
        /// Opening time.
        open: String,
        /// Closing time.
        close: String,
    },

    /// There is nothing to export for the selected date.
    #[error("No reservations to export.")]
    NothingToExport {
        /// The selected date.
        date: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Stored data could not be interpreted.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl From<crate::slot::InvalidSlotError> for Error {
    fn from(err: crate::slot::InvalidSlotError) -> Self {
        Self::InvalidSlot {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a user-correctable rejection of a form or
    /// command, as opposed to an environment failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::Error;
    ///
    /// let err = Error::NothingToExport { date: "2025-10-01".into() };
    /// assert!(err.is_user_rejection());
    ///
    /// let err = Error::LockTimeout { seconds: 5 };
    /// assert!(!err.is_user_rejection());
    /// ```
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredFields { .. }
                | Self::SlotFull { .. }
                | Self::SlotNotOffered { .. }
                | Self::NothingToExport { .. }
                | Self::NotFound { .. }
        )
    }
}
