//! Reservation operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: checks the request against the current list and builds a plan
//! 2. **Execution**: applies the plan to the list
//!
//! [`save_reservation`] and [`delete_reservation`] run both phases inside
//! [`ReservationStore::modify`], so the capacity check and the write happen
//! under one database transaction.
//!
//! # Examples
//!
//! ```no_run
//! use tablekeep::config::ConfigBuilder;
//! use tablekeep::database::{Database, DatabaseConfig, ReservationStore};
//! use tablekeep::operations::{save_reservation, SaveOptions};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let db = Database::open(DatabaseConfig::new("/tmp/tablekeep.db")).unwrap();
//! let mut store = ReservationStore::new(db, config.storage_key());
//!
//! let options = SaveOptions::new("Ada Lovelace", "2025-10-01", "18:30").with_party_size(Some(4));
//! let result = save_reservation(&mut store, options, &config, false).unwrap();
//! println!("saved {}", result.reservation.unwrap().id());
//! ```

pub mod delete;
pub mod executor;
pub mod init;
pub mod plan;
pub mod save;
pub mod seed;

#[cfg(test)]
mod proptests;

pub use delete::DeletePlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use save::{SaveOptions, SavePlan};
pub use seed::{sample_reservation, sample_start, seed_sample_if_empty};

use crate::config::Config;
use crate::database::ReservationStore;
use crate::error::Result;
use crate::ReservationId;

fn run(executor: PlanExecutor<'_>, plan: &OperationPlan, dry_run: bool) -> Result<ExecutionResult> {
    let mut executor = if dry_run { executor.dry_run() } else { executor };
    executor.execute(plan)
}

/// Creates or updates a reservation.
///
/// # Errors
///
/// Returns the planning error (missing fields, full slot, unknown id, ...)
/// or a storage error. Nothing is written on error or in dry-run mode.
pub fn save_reservation(
    store: &mut ReservationStore,
    options: SaveOptions,
    config: &Config,
    dry_run: bool,
) -> Result<ExecutionResult> {
    let planner = SavePlan::new(options, config);
    store.modify(|list| {
        let plan = planner.build_plan(list)?;
        run(PlanExecutor::new(list), &plan, dry_run)
    })
}

/// Deletes a reservation by id.
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) for an unknown id, or
/// a storage error.
pub fn delete_reservation(
    store: &mut ReservationStore,
    id: ReservationId,
    dry_run: bool,
) -> Result<ExecutionResult> {
    let planner = DeletePlan::new(id);
    store.modify(|list| {
        let plan = planner.build_plan(list)?;
        run(PlanExecutor::new(list), &plan, dry_run)
    })
}
