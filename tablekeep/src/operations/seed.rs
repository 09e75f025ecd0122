//! Sample data for a fresh store.

use crate::database::ReservationStore;
use crate::error::Result;
use crate::{Reservation, ReservationDate, SlotSchedule, TimeSlot};

/// Preferred start time of the sample reservation.
pub const SAMPLE_START: &str = "18:00";

/// Picks the sample start from `schedule`: the first slot at or after
/// [`SAMPLE_START`], or the last slot when the day ends earlier.
///
/// # Errors
///
/// Returns an error only if [`SAMPLE_START`] fails to parse.
pub fn sample_start(schedule: &SlotSchedule) -> Result<TimeSlot> {
    let preferred: TimeSlot = SAMPLE_START.parse()?;
    Ok(schedule
        .slots()
        .find(|slot| *slot >= preferred)
        .or_else(|| schedule.slots().last())
        .unwrap_or(preferred))
}

/// Builds the sample reservation for `date` at a time `schedule` offers.
///
/// # Errors
///
/// Returns an error only if the built-in sample values fail validation.
pub fn sample_reservation(date: ReservationDate, schedule: &SlotSchedule) -> Result<Reservation> {
    let start = sample_start(schedule)?;
    Ok(Reservation::builder("Sample Customer", date, start)
        .phone("555-555-5555")
        .email("sample@email.com")
        .party_size(2)
        .build()?)
}

/// Inserts the sample reservation if the store is empty.
///
/// Returns `true` if the sample was written.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed_sample_if_empty(
    store: &mut ReservationStore,
    date: ReservationDate,
    schedule: &SlotSchedule,
) -> Result<bool> {
    let sample = sample_reservation(date, schedule)?;
    let seeded = store.modify(move |list| {
        if list.is_empty() {
            list.push(sample);
            Ok(true)
        } else {
            Ok(false)
        }
    })?;

    if seeded {
        log::debug!("seeded sample reservation for {date}");
    }
    Ok(seeded)
}
