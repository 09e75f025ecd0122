//! Slots command implementation.
//!
//! Prints the bookable times of a day with the places left in each.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_or_today, GlobalOptions};
use clap::Args;
use tablekeep::slot::capacity::{occupancy_for_date, SlotOccupancy};

/// Show the bookable times of a day.
#[derive(Args)]
pub struct SlotsCommand {
    /// Day as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Only show slots that still have room
    #[arg(long)]
    pub available: bool,
}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date_or_today(self.date.as_deref())?;
        let config = load_configuration(global)?;
        let schedule = config.schedule()?;

        let store = open_store(global, &config)?;
        let reservations = store.all()?;

        for occupancy in occupancy_for_date(&reservations, date, &schedule, config.capacity()) {
            if self.available && occupancy.is_full() {
                continue;
            }
            println!("{}", slot_line(&occupancy));
        }

        Ok(())
    }
}

fn slot_line(occupancy: &SlotOccupancy) -> String {
    let status = if occupancy.is_full() {
        "full".to_string()
    } else {
        format!("{} left", occupancy.remaining())
    };
    format!(
        "{}  {:>8}  {}",
        occupancy.slot,
        occupancy.slot.to_12_hour(),
        status
    )
}
