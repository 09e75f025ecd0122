//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, AvailabilityCommand, CompletionsCommand, DeleteCommand, EditCommand,
    ExportCommand, InitCommand, ListCommand, ReportCommand, ShowCommand, SlotsCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablekeep")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "TABLEKEEP_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "TABLEKEEP_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Book a new reservation
    Add(AddCommand),

    /// Change an existing reservation
    Edit(EditCommand),

    /// Cancel a reservation
    Delete(DeleteCommand),

    /// Show one reservation
    Show(ShowCommand),

    /// List the reservations of a day
    List(ListCommand),

    /// Show the bookable times of a day
    Slots(SlotsCommand),

    /// Check whether a slot can take another reservation
    Availability(AvailabilityCommand),

    /// Export the reservations of a day as CSV
    Export(ExportCommand),

    /// Print the occupancy report of a day
    Report(ReportCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
