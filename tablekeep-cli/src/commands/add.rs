//! Add command implementation.
//!
//! This module implements the `add` command, which books a new
//! reservation into a free slot.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, report_execution, GlobalOptions};
use clap::Args;
use tablekeep::{save_reservation, ReservationDate, SaveOptions};

/// Book a new reservation.
#[derive(Args)]
pub struct AddCommand {
    /// Guest name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Reservation date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Start time as HH:MM, one of the slots shown by `tablekeep slots`
    #[arg(long, value_name = "HH:MM", default_value = "")]
    pub start: String,

    /// Contact phone
    #[arg(long, value_name = "PHONE", default_value = "")]
    pub phone: String,

    /// Contact email
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Number of guests (default: 1)
    #[arg(long, value_name = "N")]
    pub party_size: Option<u32>,

    /// Free-form notes
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub notes: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let date = self
            .date
            .unwrap_or_else(|| ReservationDate::today().to_string());

        let options = SaveOptions::new(self.name, date, self.start)
            .with_phone(self.phone)
            .with_email(self.email)
            .with_party_size(self.party_size)
            .with_notes(self.notes);

        let result = save_reservation(&mut store, options, &config, self.dry_run)?;
        report_execution(&result, global);

        // The id alone goes to stdout so scripts can capture it
        if !result.dry_run {
            if let Some(reservation) = result.reservation {
                println!("{}", reservation.id());
            }
        }

        Ok(())
    }
}
