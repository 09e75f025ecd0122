//! List command implementation.
//!
//! This module implements the `list` command, which displays the
//! reservations of one day in time order, in table, JSON or CSV form.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_or_today, GlobalOptions};
use clap::Args;
use tablekeep::config::OutputFormat;
use tablekeep::Reservation;

/// List the reservations of a day.
#[derive(Args)]
pub struct ListCommand {
    /// Day to list as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Only show reservations whose name contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Output format: table, json or csv
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve the day
        let date = parse_date_or_today(self.date.as_deref())?;

        // 2. Load configuration
        let config = load_configuration(global)?;

        // 3. Open store and query the day
        let store = open_store(global, &config)?;
        let day = store.by_date(date)?;

        // 4. Apply the search filter
        let shown: Vec<Reservation> = match self.search {
            Some(ref term) => day.into_iter().filter(|r| r.matches_search(term)).collect(),
            None => day,
        };

        // 5. Format and print (--format beats TABLEKEEP_OUTPUT_FORMAT and config)
        let format = self.format.unwrap_or_else(|| config.output_format());
        let output = format.create_formatter(config.capacity()).format(&shown)?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }

        Ok(())
    }
}
