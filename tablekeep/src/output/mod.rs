//! Output formatting module for reservation lists.
//!
//! This module provides the list formats (table, JSON, CSV), the CSV export
//! document written for a day, and the printable daily report.

mod export;
mod formatters;
mod report;

use crate::config::OutputFormat;
use crate::{Reservation, Result};

pub use export::{export_csv, export_filename, write_csv, CSV_HEADER};
pub use formatters::{CsvFormatter, JsonFormatter, TableFormatter, EMPTY_LIST_MESSAGE};
pub use report::DailyReport;

/// Trait for formatting a list of reservations into different output formats.
pub trait ReservationFormatter {
    /// Format the given reservations into a string.
    ///
    /// Reservations are rendered in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reservations: &[Reservation]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `capacity` is shown in the table badge ("Reservation i/MAX").
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::config::OutputFormat;
    ///
    /// let formatter = OutputFormat::Table.create_formatter(20);
    /// assert_eq!(formatter.format(&[]).unwrap(), "No reservations yet.");
    /// ```
    #[must_use]
    pub fn create_formatter(&self, capacity: u32) -> Box<dyn ReservationFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter::new(capacity)),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}
