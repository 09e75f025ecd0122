//! Plan execution engine.
//!
//! The executor applies plans to an in-memory reservation list. Callers
//! load and persist the list around it, normally through
//! [`ReservationStore::modify`](crate::database::ReservationStore::modify).

use crate::error::{Error, Result};
use crate::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation created or updated, if any.
    pub reservation: Option<Reservation>,

    /// Reservations removed by the plan.
    pub removed: Vec<Reservation>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation: None,
            removed: Vec::new(),
        }
    }
}

/// Executes operation plans against a reservation list.
///
/// # Examples
///
/// ```
/// use tablekeep::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use tablekeep::Reservation;
///
/// let r = Reservation::builder("Ann", "2025-10-01".parse().unwrap(), "18:00".parse().unwrap())
///     .build()
///     .unwrap();
/// let plan = OperationPlan::new("Add Ann").add_action(PlanAction::CreateReservation(r));
///
/// let mut list = Vec::new();
/// let result = PlanExecutor::new(&mut list).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(list.is_empty());
///
/// PlanExecutor::new(&mut list).execute(&plan).unwrap();
/// assert_eq!(list.len(), 1);
/// ```
pub struct PlanExecutor<'a> {
    reservations: &'a mut Vec<Reservation>,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor over `reservations`.
    #[must_use]
    pub fn new(reservations: &'a mut Vec<Reservation>) -> Self {
        Self {
            reservations,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is checked against the list but the list is
    /// left untouched.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if an update or delete names an id that
    /// is not in the list. Actions before the failing one are not undone;
    /// the caller discards the list on error.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new(plan, self.dry_run);

        for action in &plan.actions {
            match action {
                PlanAction::CreateReservation(r) => {
                    if !self.dry_run {
                        self.reservations.push(r.clone());
                    }
                    result.reservation = Some(r.clone());
                }
                PlanAction::UpdateReservation(r) => {
                    let idx = self.position(r.id())?;
                    if !self.dry_run {
                        self.reservations[idx] = r.clone();
                    }
                    result.reservation = Some(r.clone());
                }
                PlanAction::DeleteReservation(id) => {
                    let idx = self.position(id)?;
                    let removed = if self.dry_run {
                        self.reservations[idx].clone()
                    } else {
                        self.reservations.remove(idx)
                    };
                    result.removed.push(removed);
                }
            }
            log::debug!(
                "{}{}",
                if self.dry_run { "[dry run] " } else { "" },
                action.description()
            );
        }

        Ok(result)
    }

    fn position(&self, id: &crate::ReservationId) -> Result<usize> {
        self.reservations
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })
    }
}
