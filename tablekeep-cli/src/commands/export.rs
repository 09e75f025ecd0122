//! Export command implementation.
//!
//! Writes one day's reservations as `reservations_<date>.csv`.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_or_today, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tablekeep::output::{export_csv, export_filename};

/// Export the reservations of a day as CSV.
#[derive(Args)]
pub struct ExportCommand {
    /// Day to export as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Directory to write the file into (default: current directory)
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    ///
    /// A day without reservations is a semantic failure and writes nothing.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date_or_today(self.date.as_deref())?;
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let csv = export_csv(&store.all()?, date)?;

        if self.stdout {
            print!("{csv}");
            return Ok(());
        }

        let dir = match self.output_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let path = dir.join(export_filename(date));
        std::fs::write(&path, csv)?;

        if !global.quiet {
            eprintln!("Exported reservations for {date}");
        }
        println!("{}", path.display());

        Ok(())
    }
}
