#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablekeep
//!
//! A library for managing restaurant table reservations.
//!
//! This library provides the slot engine that generates the bookable times of
//! a business day and enforces the per-slot capacity, along with the
//! reservation record, a local store, and the save/delete operations built on
//! top of them.
//!
//! ## Core Types
//!
//! - [`TimeSlot`] and [`SlotSchedule`]: Bookable times of day
//! - [`Reservation`], [`ReservationId`] and [`ReservationDate`]: Reservation records
//! - [`ReservationStore`]: The reservation list kept under one storage key
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tablekeep::slot::capacity::can_book;
//! use tablekeep::{Reservation, SlotSchedule};
//!
//! let schedule = SlotSchedule::default();
//! assert_eq!(schedule.len(), 25);
//!
//! let date = "2025-10-01".parse().unwrap();
//! let start = "18:00".parse().unwrap();
//! let booked = vec![Reservation::builder("Ann", date, start).build().unwrap()];
//!
//! assert!(can_book(&booked, date, start, None, 2));
//! assert!(!can_book(&booked, date, start, None, 1));
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod reservation;
pub mod slot;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, ReservationStore};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    delete_reservation, save_reservation, DeletePlan, ExecutionResult, OperationPlan, PlanAction,
    PlanExecutor, SaveOptions, SavePlan,
};
pub use output::{DailyReport, ReservationFormatter};
pub use reservation::{Reservation, ReservationDate, ReservationId};
pub use slot::{generate_slots, SlotSchedule, TimeSlot};
