//! Availability command implementation.
//!
//! Answers whether one more reservation fits at a date and time. The
//! answer is the exit status, so the command composes in shell scripts.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_or_today, GlobalOptions};
use clap::Args;
use tablekeep::slot::capacity::{can_book, count_at_slot};
use tablekeep::TimeSlot;

/// Check whether a slot can take another reservation.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Day as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Start time as HH:MM
    #[arg(long, value_name = "HH:MM")]
    pub start: String,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    ///
    /// Succeeds when the slot has room; a full or unscheduled slot is a
    /// semantic failure (exit code 1).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date_or_today(self.date.as_deref())?;
        let start: TimeSlot = self
            .start
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("{e}")))?;

        let config = load_configuration(global)?;
        let schedule = config.schedule()?;
        if !schedule.contains(start) {
            return Err(CliError::SemanticFailure(format!(
                "{start} is not a bookable time (open {}-{})",
                schedule.open(),
                schedule.close()
            )));
        }

        let store = open_store(global, &config)?;
        let reservations = store.all()?;
        let capacity = config.capacity();
        let booked = count_at_slot(&reservations, date, start, None);

        if !can_book(&reservations, date, start, None, capacity) {
            return Err(CliError::SemanticFailure(format!(
                "{date} {} is full ({booked} of {capacity} reserved)",
                start.to_12_hour()
            )));
        }

        if !global.quiet {
            println!(
                "{date} {} is available ({booked} of {capacity} reserved)",
                start.to_12_hour()
            );
        }

        Ok(())
    }
}
