//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, report_execution, GlobalOptions};
use clap::Args;
use tablekeep::{delete_reservation, ReservationId};

/// Cancel a reservation.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id: ReservationId = self
            .id
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("{e}")))?;

        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let result = delete_reservation(&mut store, id, self.dry_run)?;
        report_execution(&result, global);

        if !result.dry_run && !global.quiet {
            for removed in &result.removed {
                eprintln!(
                    "Deleted reservation for {} on {} at {}",
                    removed.name(),
                    removed.date(),
                    removed.start().to_12_hour()
                );
            }
        }

        Ok(())
    }
}
