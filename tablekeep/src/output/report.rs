//! Printable daily occupancy report.

use std::fmt;

use crate::slot::capacity::{occupancy_for_date, SlotOccupancy};
use crate::{Reservation, ReservationDate, SlotSchedule};

/// Occupancy summary of one day.
///
/// Totals include every reservation on the date, also those whose start is
/// no longer part of the schedule; the per-slot lines cover the schedule.
///
/// # Examples
///
/// ```
/// use tablekeep::output::DailyReport;
/// use tablekeep::{Reservation, SlotSchedule};
///
/// let date = "2025-10-01".parse().unwrap();
/// let list = vec![
///     Reservation::builder("Ann", date, "18:00".parse().unwrap()).party_size(4).build().unwrap(),
///     Reservation::builder("Bob", date, "18:00".parse().unwrap()).party_size(2).build().unwrap(),
/// ];
///
/// let report = DailyReport::build(&list, date, &SlotSchedule::default(), 20);
/// assert_eq!(report.total_reservations, 2);
/// assert_eq!(report.total_covers, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    /// The reported date.
    pub date: ReservationDate,
    /// Per-slot capacity.
    pub capacity: u32,
    /// Occupancy of every scheduled slot, in order.
    pub slots: Vec<SlotOccupancy>,
    /// Number of reservations on the date.
    pub total_reservations: usize,
    /// Sum of party sizes on the date.
    pub total_covers: u32,
    /// Reservations on the date whose start is not a scheduled slot.
    pub off_schedule: usize,
}

impl DailyReport {
    /// Builds the report for `date`.
    #[must_use]
    pub fn build(
        reservations: &[Reservation],
        date: ReservationDate,
        schedule: &SlotSchedule,
        capacity: u32,
    ) -> Self {
        let on_date: Vec<&Reservation> = reservations.iter().filter(|r| r.date() == date).collect();

        Self {
            date,
            capacity,
            slots: occupancy_for_date(reservations, date, schedule, capacity),
            total_reservations: on_date.len(),
            total_covers: on_date
                .iter()
                .fold(0u32, |sum, r| sum.saturating_add(r.party_size())),
            off_schedule: on_date
                .iter()
                .filter(|r| !schedule.contains(r.start()))
                .count(),
        }
    }

    /// Number of scheduled slots that are full.
    #[must_use]
    pub fn full_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_full()).count()
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily report for {}", self.date)?;
        writeln!(
            f,
            "Reservations: {}  Covers: {}  Full slots: {}",
            self.total_reservations,
            self.total_covers,
            self.full_slots()
        )?;
        if self.off_schedule > 0 {
            writeln!(f, "Outside current hours: {}", self.off_schedule)?;
        }
        writeln!(f)?;
        writeln!(f, "{:>8}  {:>7}  {:>6}", "Time", "Booked", "Covers")?;
        for slot in &self.slots {
            write!(
                f,
                "{:>8}  {:>7}  {:>6}",
                slot.slot.to_12_hour(),
                format!("{}/{}", slot.booked, slot.capacity),
                slot.covers
            )?;
            if slot.is_full() {
                write!(f, "  FULL")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
