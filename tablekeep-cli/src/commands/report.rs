//! Report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_or_today, GlobalOptions};
use clap::Args;
use tablekeep::DailyReport;

/// Print the occupancy report of a day.
#[derive(Args)]
pub struct ReportCommand {
    /// Day as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date_or_today(self.date.as_deref())?;
        let config = load_configuration(global)?;
        let schedule = config.schedule()?;
        let store = open_store(global, &config)?;

        let report = DailyReport::build(&store.all()?, date, &schedule, config.capacity());
        print!("{report}");

        Ok(())
    }
}
