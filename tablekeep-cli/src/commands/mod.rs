//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `add`: Book a new reservation
//! - `edit`: Change an existing reservation
//! - `delete`: Cancel a reservation
//! - `show`: Show one reservation
//! - `list`: List the reservations of a day
//! - `slots`: Show the bookable times of a day
//! - `availability`: Check whether a slot has room
//! - `export`: Export a day as CSV
//! - `report`: Print a day's occupancy report
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod availability;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod show;
pub mod slots;
pub mod validate;

pub use add::AddCommand;
pub use availability::AvailabilityCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use export::ExportCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use report::ReportCommand;
pub use show::ShowCommand;
pub use slots::SlotsCommand;
pub use validate::ValidateCommand;
