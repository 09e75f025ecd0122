//! CSV export of one day's reservations.

use crate::{Error, Reservation, ReservationDate, Result};

/// Column names, written unquoted on the first line.
pub const CSV_HEADER: [&str; 7] = ["name", "phone", "email", "partySize", "date", "start", "notes"];

/// Writes `reservations` as CSV in the order given.
///
/// The header line is plain; every data field is double-quoted with inner
/// quotes doubled. Every line ends with `\n`.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn write_csv(reservations: &[Reservation]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in reservations {
        let party_size = r.party_size().to_string();
        let date = r.date().to_string();
        let start = r.start().to_string();
        writer.write_record([
            r.name(),
            r.phone(),
            r.email(),
            party_size.as_str(),
            date.as_str(),
            start.as_str(),
            r.notes(),
        ])?;
    }

    let rows = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;

    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(&rows));
    Ok(out)
}

/// Builds the export document for `date`: its reservations sorted by start.
///
/// # Errors
///
/// Returns [`Error::NothingToExport`] when the date has no reservations;
/// no document should be written in that case.
///
/// # Examples
///
/// ```
/// use tablekeep::output::export_csv;
/// use tablekeep::Reservation;
///
/// let date = "2025-10-01".parse().unwrap();
/// let r = Reservation::builder("Ann", date, "18:00".parse().unwrap()).build().unwrap();
///
/// let csv = export_csv(&[r], date).unwrap();
/// assert!(csv.starts_with("name,phone,email,partySize,date,start,notes\n"));
///
/// let other_day = "2025-10-02".parse().unwrap();
/// assert!(export_csv(&[], other_day).is_err());
/// ```
pub fn export_csv(reservations: &[Reservation], date: ReservationDate) -> Result<String> {
    let mut rows: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.date() == date)
        .cloned()
        .collect();
    if rows.is_empty() {
        return Err(Error::NothingToExport {
            date: date.to_string(),
        });
    }
    rows.sort_by_key(Reservation::start);

    write_csv(&rows)
}

/// File name of the export document for `date`.
///
/// # Examples
///
/// ```
/// use tablekeep::output::export_filename;
///
/// assert_eq!(export_filename("2025-10-01".parse().unwrap()), "reservations_2025-10-01.csv");
/// ```
#[must_use]
pub fn export_filename(date: ReservationDate) -> String {
    format!("reservations_{date}.csv")
}
