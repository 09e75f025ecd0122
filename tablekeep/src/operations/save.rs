//! Save (create or update) planning.
//!
//! A save takes the raw form values, checks them in the same order the
//! booking form does and produces a one-action plan.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::slot::capacity::can_book;
use crate::{Reservation, ReservationDate, ReservationId, TimeSlot};

use super::plan::{OperationPlan, PlanAction};

/// Raw values submitted for a save.
///
/// `id` is `None` for a new reservation. `party_size` of `None` means the
/// field was left blank and becomes 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Identifier of the reservation being edited.
    pub id: Option<ReservationId>,
    /// Guest name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Number of guests.
    pub party_size: Option<u32>,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Start time as `HH:MM`.
    pub start: String,
    /// Free-form notes.
    pub notes: String,
}

impl SaveOptions {
    /// Creates options for a new reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::operations::SaveOptions;
    ///
    /// let options = SaveOptions::new("Ada", "2025-10-01", "18:00").with_party_size(Some(4));
    /// assert!(options.id.is_none());
    /// assert_eq!(options.party_size, Some(4));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, date: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            start: start.into(),
            ..Self::default()
        }
    }

    /// Prefills every field from a stored reservation, for editing.
    #[must_use]
    pub fn from_existing(r: &Reservation) -> Self {
        Self {
            id: Some(r.id().clone()),
            name: r.name().to_string(),
            phone: r.phone().to_string(),
            email: r.email().to_string(),
            party_size: Some(r.party_size()),
            date: r.date().to_string(),
            start: r.start().to_string(),
            notes: r.notes().to_string(),
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the party size.
    #[must_use]
    pub const fn with_party_size(mut self, party_size: Option<u32>) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A save plan generator.
pub struct SavePlan<'a> {
    options: SaveOptions,
    config: &'a Config,
}

impl<'a> SavePlan<'a> {
    /// Creates a new save plan with the given options and config.
    #[must_use]
    pub const fn new(options: SaveOptions, config: &'a Config) -> Self {
        Self { options, config }
    }

    /// Builds the plan against the current list.
    ///
    /// Checks, in order:
    /// 1. name, date and start are non-empty
    /// 2. date and start parse
    /// 3. an edited id exists
    /// 4. the start is a generated slot (an edit may keep its old start)
    /// 5. the slot has room, not counting the edited reservation itself
    /// 6. the reservation is valid (party size of at least 1)
    ///
    /// # Errors
    ///
    /// Returns the first failed check as an [`Error`]. The messages for
    /// missing fields and full slots are the ones shown to the user.
    pub fn build_plan(&self, reservations: &[Reservation]) -> Result<OperationPlan> {
        let opts = &self.options;

        let missing: Vec<String> = [
            ("name", &opts.name),
            ("date", &opts.date),
            ("start", &opts.start),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();
        if !missing.is_empty() {
            return Err(Error::MissingRequiredFields { fields: missing });
        }

        let date: ReservationDate = opts.date.parse()?;
        let start: TimeSlot = opts.start.trim().parse()?;

        let existing = match opts.id {
            Some(ref id) => Some(reservations.iter().find(|r| r.id() == id).ok_or_else(
                || Error::NotFound {
                    resource: format!("reservation {id}"),
                },
            )?),
            None => None,
        };

        let schedule = self.config.schedule()?;
        let keeps_old_start = existing.is_some_and(|r| r.date() == date && r.start() == start);
        if !schedule.contains(start) && !keeps_old_start {
            return Err(Error::SlotNotOffered {
                start: start.to_string(),
                open: schedule.open().to_string(),
                close: schedule.close().to_string(),
            });
        }

        let capacity = self.config.capacity();
        if !can_book(reservations, date, start, opts.id.as_ref(), capacity) {
            return Err(Error::SlotFull {
                date: date.to_string(),
                start: start.to_string(),
                capacity,
            });
        }

        let mut builder = Reservation::builder(&opts.name, date, start)
            .phone(&opts.phone)
            .email(&opts.email)
            .party_size(opts.party_size.unwrap_or(1))
            .notes(&opts.notes);
        if let Some(ref id) = opts.id {
            builder = builder.id(id.clone());
        }
        let reservation = builder.build()?;

        let plan = if existing.is_some() {
            OperationPlan::new(format!("Update reservation {}", reservation.id()))
                .add_action(PlanAction::UpdateReservation(reservation))
        } else {
            OperationPlan::new(format!("Create reservation for {}", reservation.name()))
                .add_action(PlanAction::CreateReservation(reservation))
        };

        let plan = if keeps_old_start && !schedule.contains(start) {
            plan.add_warning(format!(
                "{start} is outside the current hours; kept from the original booking"
            ))
        } else {
            plan
        };

        Ok(plan)
    }
}
