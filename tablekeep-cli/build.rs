//! Build script for tablekeep-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tablekeep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant table reservations")
        .long_about(
            "Command-line tool for booking restaurant tables into fixed time slots of limited capacity",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEKEEP_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("TABLEKEEP_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("TABLEKEEP_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the database, optionally a configuration file and a sample reservation"),
            Command::new("add")
                .about("Book a new reservation")
                .long_about("Book a reservation into a bookable time slot that still has room"),
            Command::new("edit")
                .about("Change an existing reservation")
                .long_about("Change the fields of a reservation; unchanged fields keep their stored value"),
            Command::new("delete")
                .about("Cancel a reservation")
                .long_about("Remove a reservation by id"),
            Command::new("show")
                .about("Show one reservation")
                .long_about("Display every field of a reservation"),
            Command::new("list")
                .about("List the reservations of a day")
                .long_about("Display the reservations of a day in time order as a table, JSON or CSV"),
            Command::new("slots")
                .about("Show the bookable times of a day")
                .long_about("Display every bookable time of a day with the places left"),
            Command::new("availability")
                .about("Check whether a slot can take another reservation")
                .long_about("Exit with status 0 if the slot has room and 1 if it is full"),
            Command::new("export")
                .about("Export the reservations of a day as CSV")
                .long_about("Write reservations_<date>.csv for one day"),
            Command::new("report")
                .about("Print the occupancy report of a day")
                .long_about("Summarize reservations, covers and full slots of a day"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a tablekeep configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man directory");

    // Generate main tablekeep.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("failed to render man page");

    fs::write(man_dir.join("tablekeep.1"), buffer).expect("failed to write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
