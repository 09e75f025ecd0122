//! Property-based tests for operations module.
//!
//! These tests focus on the plan-execute pattern and the capacity invariant.

use super::{DeletePlan, PlanExecutor, SaveOptions, SavePlan};
use crate::config::{Config, ConfigBuilder};
use crate::slot::capacity::count_at_slot;
use crate::{Error, Reservation, SlotSchedule};
use proptest::prelude::*;

// A request is (guest index, day of month, slot index into the default schedule)
fn request_strategy() -> impl Strategy<Value = (usize, u32, usize)> {
    (0usize..50, 1u32..=3, 0usize..4)
}

fn config(capacity: u32) -> Config {
    ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            max_tables: Some(capacity),
            ..Default::default()
        })
        .build()
        .unwrap()
}

fn start_for(index: usize) -> String {
    SlotSchedule::default()
        .slots()
        .nth(index)
        .unwrap()
        .to_string()
}

fn apply_save(list: &mut Vec<Reservation>, options: SaveOptions, config: &Config) -> crate::Result<()> {
    let plan = SavePlan::new(options, config).build_plan(list)?;
    PlanExecutor::new(list).execute(&plan).map(|_| ())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // No sequence of creates puts more than `capacity` bookings in one slot
    #[test]
    fn saves_never_exceed_capacity(
        capacity in 1u32..5,
        requests in prop::collection::vec(request_strategy(), 1..40),
    ) {
        let config = config(capacity);
        let mut list = Vec::new();

        for (guest, day, slot) in requests {
            let options = SaveOptions::new(
                format!("Guest {guest}"),
                format!("2025-10-{day:02}"),
                start_for(slot),
            );
            match apply_save(&mut list, options, &config) {
                Ok(()) | Err(Error::SlotFull { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }

        for r in &list {
            let n = count_at_slot(&list, r.date(), r.start(), None);
            prop_assert!(u32::try_from(n).unwrap() <= capacity);
        }
    }

    // Resubmitting any stored reservation unchanged always succeeds,
    // even when its slot is full
    #[test]
    fn resubmitting_never_counts_itself(
        capacity in 1u32..4,
        requests in prop::collection::vec(request_strategy(), 1..20),
    ) {
        let config = config(capacity);
        let mut list = Vec::new();
        for (guest, day, slot) in requests {
            let options = SaveOptions::new(
                format!("Guest {guest}"),
                format!("2025-10-{day:02}"),
                start_for(slot),
            );
            let _ = apply_save(&mut list, options, &config);
        }

        let before = list.clone();
        for r in &before {
            prop_assert!(apply_save(&mut list, SaveOptions::from_existing(r), &config).is_ok());
        }
        prop_assert_eq!(list, before);
    }

    // Dry-run execution leaves the list untouched
    #[test]
    fn dry_run_is_side_effect_free(guest in 0usize..50, slot in 0usize..4, delete in any::<bool>()) {
        let config = config(20);
        let mut list = Vec::new();
        apply_save(&mut list, SaveOptions::new("Seed", "2025-10-01", "18:00"), &config).unwrap();
        let before = list.clone();

        let plan = if delete {
            DeletePlan::new(list[0].id().clone()).build_plan(&list).unwrap()
        } else {
            SavePlan::new(
                SaveOptions::new(format!("Guest {guest}"), "2025-10-01", start_for(slot)),
                &config,
            )
            .build_plan(&list)
            .unwrap()
        };

        let result = PlanExecutor::new(&mut list).dry_run().execute(&plan).unwrap();
        prop_assert!(result.dry_run);
        prop_assert_eq!(list, before);
    }

    // Deleting then re-adding in a full slot always succeeds
    #[test]
    fn delete_frees_a_place(capacity in 1u32..6) {
        let config = config(capacity);
        let mut list = Vec::new();
        for i in 0..capacity {
            apply_save(&mut list, SaveOptions::new(format!("G{i}"), "2025-10-01", "20:00"), &config)
                .unwrap();
        }
        let full = apply_save(&mut list, SaveOptions::new("Late", "2025-10-01", "20:00"), &config);
        let slot_full = matches!(full, Err(Error::SlotFull { .. }));
        prop_assert!(slot_full);

        let plan = DeletePlan::new(list[0].id().clone()).build_plan(&list).unwrap();
        PlanExecutor::new(&mut list).execute(&plan).unwrap();
        prop_assert!(apply_save(&mut list, SaveOptions::new("Late", "2025-10-01", "20:00"), &config).is_ok());
    }
}
