//! Output formatter implementations.

use crate::{Error, Reservation, Result};

use super::{write_csv, ReservationFormatter};

/// Shown by the table format when there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "No reservations yet.";

/// Formatter for the human-readable day list.
///
/// One line per reservation:
/// `6:00 PM • Ada Lovelace (Party 4 • Reservation 1/20)  [id]`.
/// The badge number is the line's position in the list.
pub struct TableFormatter {
    capacity: u32,
}

impl TableFormatter {
    /// Create a new table formatter showing `capacity` in the badge.
    #[must_use]
    pub const fn new(capacity: u32) -> Self {
        Self { capacity }
    }
}

impl ReservationFormatter for TableFormatter {
    fn format(&self, reservations: &[Reservation]) -> Result<String> {
        if reservations.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        let lines: Vec<String> = reservations
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "{:>8} • {} (Party {} • Reservation {}/{})  [{}]",
                    r.start().to_12_hour(),
                    r.name(),
                    r.party_size(),
                    i + 1,
                    self.capacity,
                    r.id()
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output, using the stored field names.
pub struct JsonFormatter;

impl ReservationFormatter for JsonFormatter {
    fn format(&self, reservations: &[Reservation]) -> Result<String> {
        serde_json::to_string_pretty(reservations).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for CSV output, in the export layout.
///
/// Unlike [`export_csv`](super::export_csv), an empty list gives just the
/// header.
pub struct CsvFormatter;

impl ReservationFormatter for CsvFormatter {
    fn format(&self, reservations: &[Reservation]) -> Result<String> {
        write_csv(reservations)
    }
}
