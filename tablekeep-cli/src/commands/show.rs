//! Show command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use std::fmt::Write as _;
use tablekeep::config::OutputFormat;
use tablekeep::{Reservation, ReservationId};

/// Show one reservation in full.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format: table, json or csv
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id: ReservationId = self
            .id
            .parse()
            .map_err(|e| CliError::InvalidArguments(format!("{e}")))?;

        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservation = store.find(&id)?.ok_or_else(|| tablekeep::Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        let output = match self.format.unwrap_or_else(|| config.output_format()) {
            OutputFormat::Table => details(&reservation),
            format => format
                .create_formatter(config.capacity())
                .format(std::slice::from_ref(&reservation))?,
        };
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }

        Ok(())
    }
}

/// One `label: value` line per field; empty contact fields are skipped.
fn details(r: &Reservation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Id:         {}", r.id());
    let _ = writeln!(out, "Name:       {}", r.name());
    let _ = writeln!(out, "Date:       {}", r.date());
    let _ = writeln!(out, "Time:       {} ({})", r.start().to_12_hour(), r.start());
    let _ = writeln!(out, "Party size: {}", r.party_size());
    if !r.phone().is_empty() {
        let _ = writeln!(out, "Phone:      {}", r.phone());
    }
    if !r.email().is_empty() {
        let _ = writeln!(out, "Email:      {}", r.email());
    }
    if !r.notes().is_empty() {
        let _ = writeln!(out, "Notes:      {}", r.notes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_skips_empty_fields() {
        let r = Reservation::builder(
            "Ada",
            "2025-10-01".parse().unwrap(),
            "18:30".parse().unwrap(),
        )
        .party_size(4)
        .email("ada@example.com")
        .build()
        .unwrap();

        let text = details(&r);
        assert!(text.contains("Name:       Ada\n"));
        assert!(text.contains("Time:       6:30 PM (18:30)\n"));
        assert!(text.contains("Party size: 4\n"));
        assert!(text.contains("Email:      ada@example.com\n"));
        assert!(!text.contains("Phone:"));
        assert!(!text.contains("Notes:"));
    }
}
