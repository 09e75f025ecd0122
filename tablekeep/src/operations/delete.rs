//! Delete planning.

use crate::error::{Error, Result};
use crate::{Reservation, ReservationId};

use super::plan::{OperationPlan, PlanAction};

/// A delete plan generator.
///
/// # Examples
///
/// ```
/// use tablekeep::operations::DeletePlan;
/// use tablekeep::{Reservation, ReservationId};
///
/// let r = Reservation::builder("Ann", "2025-10-01".parse().unwrap(), "18:00".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let plan = DeletePlan::new(r.id().clone()).build_plan(&[r]).unwrap();
/// assert_eq!(plan.len(), 1);
///
/// let missing = ReservationId::new("nope").unwrap();
/// assert!(DeletePlan::new(missing).build_plan(&[]).is_err());
/// ```
pub struct DeletePlan {
    id: ReservationId,
}

impl DeletePlan {
    /// Creates a plan generator for deleting `id`.
    #[must_use]
    pub const fn new(id: ReservationId) -> Self {
        Self { id }
    }

    /// Builds the plan against the current list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has the id.
    pub fn build_plan(&self, reservations: &[Reservation]) -> Result<OperationPlan> {
        let target = reservations
            .iter()
            .find(|r| r.id() == &self.id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {}", self.id),
            })?;

        Ok(OperationPlan::new(format!(
            "Delete reservation for {} on {} at {}",
            target.name(),
            target.date(),
            target.start()
        ))
        .add_action(PlanAction::DeleteReservation(self.id.clone())))
    }
}
