//! Reservation types for tracking table bookings.
//!
//! This module provides the reservation record, its identifier and date
//! types, and a builder that performs validated construction.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::TimeSlot;

#[cfg(test)]
mod proptests;

/// Date format used for storage, display and file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error raised when a reservation field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Opaque, immutable identifier of a reservation.
///
/// New identifiers are random UUIDs. Identifiers read back from storage are
/// accepted as any non-empty string.
///
/// # Examples
///
/// ```
/// use tablekeep::ReservationId;
///
/// let a = ReservationId::generate();
/// let b = ReservationId::generate();
/// assert_ne!(a, b);
///
/// assert!(ReservationId::new("k3j2h1").is_ok());
/// assert!(ReservationId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Creates an identifier from an existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "id".into(),
                message: "id must be non-empty".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A calendar date written as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use tablekeep::ReservationDate;
///
/// let date: ReservationDate = "2025-10-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2025-10-01");
///
/// assert!("2025-02-30".parse::<ReservationDate>().is_err());
/// assert!("10-01-2025".parse::<ReservationDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    /// Today's date on the local clock.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ReservationDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the stored format is always padded.
        if trimmed.len() != 10 {
            return Err(Error::InvalidDate {
                value: s.to_string(),
                reason: "expected YYYY-MM-DD".into(),
            });
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|e| Error::InvalidDate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<String> for ReservationDate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReservationDate> for String {
    fn from(date: ReservationDate) -> Self {
        date.to_string()
    }
}

/// A table reservation.
///
/// Serialized with the field names of the stored JSON array:
/// `id, name, phone, email, partySize, date, start, notes`.
///
/// # Examples
///
/// ```
/// use tablekeep::{Reservation, ReservationDate, TimeSlot};
///
/// let date: ReservationDate = "2025-10-01".parse().unwrap();
/// let start: TimeSlot = "18:00".parse().unwrap();
///
/// let reservation = Reservation::builder("Ada Lovelace", date, start)
///     .party_size(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.name(), "Ada Lovelace");
/// assert_eq!(reservation.party_size(), 4);
/// assert_eq!(reservation.phone(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredReservation")]
pub struct Reservation {
    id: ReservationId,
    name: String,
    phone: String,
    email: String,
    party_size: u32,
    date: ReservationDate,
    start: TimeSlot,
    notes: String,
}

impl Reservation {
    /// Creates a new reservation builder with the required fields.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        date: ReservationDate,
        start: TimeSlot,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            name: name.into(),
            phone: String::new(),
            email: String::new(),
            party_size: 1,
            date,
            start,
            notes: String::new(),
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact phone number (may be empty).
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the contact email (may be empty).
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> ReservationDate {
        self.date
    }

    /// Returns the start slot.
    #[must_use]
    pub const fn start(&self) -> TimeSlot {
        self.start
    }

    /// Returns free-form notes (may be empty).
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns `true` if the guest name contains `term`, ignoring case.
    ///
    /// An empty or whitespace-only term matches everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::{Reservation, ReservationDate, TimeSlot};
    ///
    /// let r = Reservation::builder(
    ///     "Grace Hopper",
    ///     "2025-10-01".parse().unwrap(),
    ///     "19:00".parse().unwrap(),
    /// )
    /// .build()
    /// .unwrap();
    ///
    /// assert!(r.matches_search("hop"));
    /// assert!(r.matches_search(""));
    /// assert!(!r.matches_search("lovelace"));
    /// ```
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.name.to_lowercase().contains(&term)
    }
}

/// Builder for creating `Reservation` instances.
///
/// All string fields are trimmed of leading/trailing whitespace.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    name: String,
    phone: String,
    email: String,
    party_size: u32,
    date: ReservationDate,
    start: TimeSlot,
    notes: String,
}

impl ReservationBuilder {
    /// Uses an existing identifier instead of generating one.
    #[must_use]
    pub fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into().trim().to_string();
        self
    }

    /// Sets the contact email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into().trim().to_string();
        self
    }

    /// Sets the number of guests.
    #[must_use]
    pub const fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into().trim().to_string();
        self
    }

    /// Builds the reservation, generating an id if none was set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The party size is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::{Reservation, ReservationDate, TimeSlot};
    ///
    /// let date: ReservationDate = "2025-10-01".parse().unwrap();
    /// let start: TimeSlot = "18:00".parse().unwrap();
    ///
    /// assert!(Reservation::builder("   ", date, start).build().is_err());
    /// assert!(Reservation::builder("Ann", date, start).party_size(0).build().is_err());
    /// ```
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        if self.party_size == 0 {
            return Err(ValidationError {
                field: "partySize".into(),
                message: "party size must be at least 1".into(),
            });
        }

        Ok(Reservation {
            id: self.id.unwrap_or_else(ReservationId::generate),
            name,
            phone: self.phone,
            email: self.email,
            party_size: self.party_size,
            date: self.date,
            start: self.start,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Lenient shape of a stored record.
///
/// Older data may omit optional fields, store `null`, or keep the party
/// size as a string; those are normalized the way the form did.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredReservation {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    party_size: Option<serde_json::Value>,
    date: String,
    start: String,
    #[serde(default)]
    notes: Option<String>,
}

fn coerce_party_size(value: Option<&serde_json::Value>) -> u32 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

impl TryFrom<StoredReservation> for Reservation {
    type Error = ValidationError;

    fn try_from(stored: StoredReservation) -> Result<Self, Self::Error> {
        let date = stored.date.parse::<ReservationDate>().map_err(|e| ValidationError {
            field: "date".into(),
            message: e.to_string(),
        })?;
        let start = stored.start.parse::<TimeSlot>().map_err(|e| ValidationError {
            field: "start".into(),
            message: e.to_string(),
        })?;

        Reservation::builder(stored.name, date, start)
            .id(ReservationId::new(stored.id)?)
            .phone(stored.phone.unwrap_or_default())
            .email(stored.email.unwrap_or_default())
            .party_size(coerce_party_size(stored.party_size.as_ref()))
            .notes(stored.notes.unwrap_or_default())
            .build()
    }
}
