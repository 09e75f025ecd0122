//! Edit command implementation.
//!
//! This module implements the `edit` command. Every field starts from the
//! stored reservation; only the flags given replace it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, report_execution, GlobalOptions};
use clap::Args;
use tablekeep::{save_reservation, ReservationId, SaveOptions};

/// Change an existing reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Guest name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Reservation date as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Start time as HH:MM
    #[arg(long, value_name = "HH:MM")]
    pub start: Option<String>,

    /// Contact phone
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Contact email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Number of guests
    #[arg(long, value_name = "N")]
    pub party_size: Option<u32>,

    /// Free-form notes
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id: ReservationId = self
            .id
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("{e}")))?;

        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let existing = store
            .find(&id)?
            .ok_or_else(|| tablekeep::Error::NotFound {
                resource: format!("reservation {id}"),
            })?;

        let mut options = SaveOptions::from_existing(&existing);
        if let Some(name) = self.name {
            options.name = name;
        }
        if let Some(date) = self.date {
            options.date = date;
        }
        if let Some(start) = self.start {
            options.start = start;
        }
        if let Some(phone) = self.phone {
            options.phone = phone;
        }
        if let Some(email) = self.email {
            options.email = email;
        }
        if self.party_size.is_some() {
            options.party_size = self.party_size;
        }
        if let Some(notes) = self.notes {
            options.notes = notes;
        }

        let result = save_reservation(&mut store, options, &config, self.dry_run)?;
        report_execution(&result, global);

        if !result.dry_run {
            println!("{id}");
        }

        Ok(())
    }
}
