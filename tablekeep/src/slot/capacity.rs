//! Per-slot occupancy and the admission rule.
//!
//! Occupancy is counted over a plain slice of reservations; there is no
//! index. A reservation may be placed in a slot while the number of other
//! reservations sharing its date and start is below the capacity.

use crate::{Reservation, ReservationDate, ReservationId, SlotSchedule, TimeSlot};

/// Default number of reservations allowed per slot per day.
pub const DEFAULT_MAX_TABLES: u32 = 20;

/// Counts reservations on `date` starting at `start`.
///
/// The reservation identified by `exclude`, if any, is not counted. This is
/// how an edited reservation avoids counting against itself.
///
/// # Examples
///
/// ```
/// use tablekeep::slot::capacity::count_at_slot;
/// use tablekeep::{Reservation, ReservationDate, TimeSlot};
///
/// let date: ReservationDate = "2025-10-01".parse().unwrap();
/// let six: TimeSlot = "18:00".parse().unwrap();
/// let booked = vec![
///     Reservation::builder("Ann", date, six).build().unwrap(),
///     Reservation::builder("Bob", date, six).build().unwrap(),
/// ];
///
/// assert_eq!(count_at_slot(&booked, date, six, None), 2);
/// assert_eq!(count_at_slot(&booked, date, six, Some(booked[0].id())), 1);
/// ```
#[must_use]
pub fn count_at_slot(
    reservations: &[Reservation],
    date: ReservationDate,
    start: TimeSlot,
    exclude: Option<&ReservationId>,
) -> usize {
    reservations
        .iter()
        .filter(|r| r.date() == date && r.start() == start)
        .filter(|r| exclude != Some(r.id()))
        .count()
}

/// Returns `true` iff another reservation fits in the slot.
///
/// # Examples
///
/// ```
/// use tablekeep::slot::capacity::can_book;
/// use tablekeep::{Reservation, ReservationDate, TimeSlot};
///
/// let date: ReservationDate = "2025-10-01".parse().unwrap();
/// let six: TimeSlot = "18:00".parse().unwrap();
/// let booked = vec![Reservation::builder("Ann", date, six).build().unwrap()];
///
/// assert!(!can_book(&booked, date, six, None, 1));
/// assert!(can_book(&booked, date, six, Some(booked[0].id()), 1));
/// ```
#[must_use]
pub fn can_book(
    reservations: &[Reservation],
    date: ReservationDate,
    start: TimeSlot,
    exclude: Option<&ReservationId>,
    capacity: u32,
) -> bool {
    let count = count_at_slot(reservations, date, start, exclude);
    u32::try_from(count).map_or(false, |count| count < capacity)
}

/// Booked and remaining places of one slot on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOccupancy {
    /// The slot.
    pub slot: TimeSlot,
    /// Reservations starting at this slot.
    pub booked: usize,
    /// Sum of party sizes starting at this slot.
    pub covers: u32,
    /// Configured capacity.
    pub capacity: u32,
}

impl SlotOccupancy {
    /// Places left before the slot is full.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        let booked = u32::try_from(self.booked).unwrap_or(u32::MAX);
        self.capacity.saturating_sub(booked)
    }

    /// Returns `true` when no new reservation fits.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

/// Computes occupancy for every slot of `schedule` on `date`.
///
/// Reservations whose start lies outside the schedule are not reported.
#[must_use]
pub fn occupancy_for_date(
    reservations: &[Reservation],
    date: ReservationDate,
    schedule: &SlotSchedule,
    capacity: u32,
) -> Vec<SlotOccupancy> {
    schedule
        .slots()
        .map(|slot| {
            let at_slot = reservations
                .iter()
                .filter(|r| r.date() == date && r.start() == slot);
            let (booked, covers) =
                at_slot.fold((0usize, 0u32), |(n, c), r| (n + 1, c.saturating_add(r.party_size())));
            SlotOccupancy {
                slot,
                booked,
                covers,
                capacity,
            }
        })
        .collect()
}
