//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::{Reservation, ReservationId};

/// A single action to be taken during plan execution.
///
/// `CreateReservation` appends to the list; `UpdateReservation` replaces the
/// record with the same id in place, so edits keep their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Append a new reservation.
    CreateReservation(Reservation),

    /// Replace an existing reservation with the same id.
    UpdateReservation(Reservation),

    /// Remove a reservation.
    DeleteReservation(ReservationId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation(r) => format!(
                "Create reservation for {} (party of {}) on {} at {}",
                r.name(),
                r.party_size(),
                r.date(),
                r.start()
            ),
            Self::UpdateReservation(r) => format!(
                "Update reservation {} for {} to {} at {}",
                r.id(),
                r.name(),
                r.date(),
                r.start()
            ),
            Self::DeleteReservation(id) => format!("Delete reservation {id}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeep::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Save reservation");
    /// assert_eq!(plan.description, "Save reservation");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
