//! Time slots and the opening-hours schedule.
//!
//! A [`TimeSlot`] is a time of day at which a reservation may start. A
//! [`SlotSchedule`] generates the bookable slots of a business day from the
//! opening time, the closing time (inclusive) and a fixed step.

pub mod capacity;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Default opening time in minutes since midnight (10:00).
pub const DEFAULT_OPEN_MINUTES: u16 = 10 * 60;

/// Default closing time in minutes since midnight (22:00).
pub const DEFAULT_CLOSE_MINUTES: u16 = 22 * 60;

/// Default distance between two slots, in minutes.
pub const DEFAULT_STEP_MINUTES: u16 = 30;

/// A time of day, stored as minutes since midnight and written as `HH:MM`.
///
/// # Examples
///
/// ```
/// use tablekeep::TimeSlot;
///
/// let slot: TimeSlot = "18:30".parse().unwrap();
/// assert_eq!(slot.minutes(), 18 * 60 + 30);
/// assert_eq!(slot.to_string(), "18:30");
/// assert_eq!(slot.to_12_hour(), "6:30 PM");
///
/// assert!("24:00".parse::<TimeSlot>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u16);

impl TimeSlot {
    /// The last representable minute of the day (23:59).
    pub const LAST_MINUTE: u16 = MINUTES_PER_DAY - 1;

    /// Creates a slot from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is past 23:59.
    pub fn from_minutes(minutes: u16) -> std::result::Result<Self, InvalidSlotError> {
        if minutes > Self::LAST_MINUTE {
            return Err(InvalidSlotError {
                value: minutes.to_string(),
                reason: format!("must be below {MINUTES_PER_DAY} minutes"),
            });
        }
        Ok(Self(minutes))
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Formats the slot for display on a 12-hour clock, e.g. `6:00 PM`.
    #[must_use]
    pub fn to_12_hour(self) -> String {
        let hour = self.hour();
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = (hour + 11) % 12 + 1;
        format!("{display_hour}:{:02} {suffix}", self.minute())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = InvalidSlotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidSlotError {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(invalid("expected HH:MM"));
        }

        let hour: u16 = hour.parse().map_err(|_| invalid("expected HH:MM"))?;
        let minute: u16 = minute.parse().map_err(|_| invalid("expected HH:MM"))?;
        if hour > 23 {
            return Err(invalid("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(invalid("minute must be 0-59"));
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = InvalidSlotError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Error type for invalid times of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotError {
    /// The rejected input.
    pub value: String,
    /// The reason it was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time slot '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSlotError {}

/// The bookable slots of a business day.
///
/// Slots run from `open` to `close` inclusive, `step` minutes apart.
///
/// # Examples
///
/// ```
/// use tablekeep::SlotSchedule;
///
/// let schedule = SlotSchedule::default();
/// assert_eq!(schedule.len(), 25);
///
/// let slots: Vec<String> = schedule.slots().map(|s| s.to_string()).collect();
/// assert_eq!(slots.first().map(String::as_str), Some("10:00"));
/// assert_eq!(slots.last().map(String::as_str), Some("22:00"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSchedule {
    open: TimeSlot,
    close: TimeSlot,
    step: u16,
}

impl SlotSchedule {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero or `close` is before `open`.
    pub fn new(open: TimeSlot, close: TimeSlot, step: u16) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidSchedule {
            open: open.to_string(),
            close: close.to_string(),
            step,
            reason: reason.to_string(),
        };

        if step == 0 {
            return Err(invalid("step must be greater than 0"));
        }
        if close < open {
            return Err(invalid("close must not be before open"));
        }

        Ok(Self { open, close, step })
    }

    /// Opening time (first slot).
    #[must_use]
    pub const fn open(&self) -> TimeSlot {
        self.open
    }

    /// Closing time; the last slot is at or before it.
    #[must_use]
    pub const fn close(&self) -> TimeSlot {
        self.close
    }

    /// Minutes between consecutive slots.
    #[must_use]
    pub const fn step(&self) -> u16 {
        self.step
    }

    /// Iterates over the slots in order. Each call starts a fresh pass.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        let (open, close, step) = (self.open.0, self.close.0, self.step);
        (open..=close).step_by(usize::from(step)).map(TimeSlot)
    }

    /// Returns `true` if `slot` is one of the generated slots.
    #[must_use]
    pub fn contains(&self, slot: TimeSlot) -> bool {
        slot >= self.open && slot <= self.close && (slot.0 - self.open.0) % self.step == 0
    }

    /// Number of slots in the day.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from((self.close.0 - self.open.0) / self.step) + 1
    }

    /// Always `false`: a valid schedule has at least the opening slot.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SlotSchedule {
    fn default() -> Self {
        Self {
            open: TimeSlot(DEFAULT_OPEN_MINUTES),
            close: TimeSlot(DEFAULT_CLOSE_MINUTES),
            step: DEFAULT_STEP_MINUTES,
        }
    }
}

/// Produces every `HH:MM` time from `open_minutes` to `close_minutes`
/// inclusive, `step_minutes` apart.
///
/// Returns an empty list when `step_minutes` is zero or the range is empty.
/// Times past 23:59 are never produced.
///
/// # Examples
///
/// ```
/// use tablekeep::generate_slots;
///
/// let slots = generate_slots(600, 1320, 30);
/// assert_eq!(slots.len(), 25);
/// assert_eq!(slots[0], "10:00");
/// assert_eq!(slots[24], "22:00");
/// ```
#[must_use]
pub fn generate_slots(open_minutes: u16, close_minutes: u16, step_minutes: u16) -> Vec<String> {
    let close = close_minutes.min(TimeSlot::LAST_MINUTE);
    if step_minutes == 0 || open_minutes > close {
        return Vec::new();
    }

    (open_minutes..=close)
        .step_by(usize::from(step_minutes))
        .map(|minutes| TimeSlot(minutes).to_string())
        .collect()
}
