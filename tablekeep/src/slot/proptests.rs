//! Property-based tests for slot generation and the capacity rule.

use super::capacity::{can_book, count_at_slot};
use super::{generate_slots, SlotSchedule, TimeSlot};
use crate::{Reservation, ReservationDate};
use proptest::prelude::*;

fn date(day: u32) -> ReservationDate {
    chrono::NaiveDate::from_ymd_opt(2025, 10, day)
        .map(ReservationDate::from)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every generated time parses back to a slot inside the requested range
    #[test]
    fn generated_slots_are_in_range_and_ordered(
        open in 0u16..1440,
        len in 0u16..1440,
        step in 1u16..180,
    ) {
        let close = open.saturating_add(len);
        let slots = generate_slots(open, close, step);

        let parsed: Vec<TimeSlot> = slots.iter().map(|s| s.parse().unwrap()).collect();
        for pair in parsed.windows(2) {
            prop_assert_eq!(pair[1].minutes() - pair[0].minutes(), step);
        }
        if let Some(first) = parsed.first() {
            prop_assert_eq!(first.minutes(), open);
        }
        for slot in &parsed {
            prop_assert!(slot.minutes() <= close.min(TimeSlot::LAST_MINUTE));
        }
    }

    // Two calls with the same inputs give the same output
    #[test]
    fn generate_slots_is_deterministic(open in 0u16..1440, close in 0u16..1440, step in 0u16..120) {
        prop_assert_eq!(generate_slots(open, close, step), generate_slots(open, close, step));
    }

    // Schedule iteration agrees with the free function
    #[test]
    fn schedule_agrees_with_generate_slots(open in 0u16..1440, len in 0u16..600, step in 1u16..120) {
        let close = (open + len).min(TimeSlot::LAST_MINUTE);
        let schedule = SlotSchedule::new(
            TimeSlot::from_minutes(open).unwrap(),
            TimeSlot::from_minutes(close).unwrap(),
            step,
        ).unwrap();

        let strings: Vec<String> = schedule.slots().map(|s| s.to_string()).collect();
        prop_assert_eq!(strings.len(), schedule.len());
        prop_assert_eq!(strings, generate_slots(open, close, step));
    }

    // A slot holding `capacity` bookings rejects one more, and accepts after a removal
    #[test]
    fn full_slot_rejects_until_one_is_removed(
        capacity in 1u32..30,
        noise in prop::collection::vec((1u32..4, 0usize..3), 0..40),
    ) {
        let target_date = date(1);
        let target_slot: TimeSlot = "18:00".parse().unwrap();
        let other_slots: [TimeSlot; 3] = [
            "17:30".parse().unwrap(),
            "18:00".parse().unwrap(),
            "18:30".parse().unwrap(),
        ];

        // Bookings on other days never count
        let mut booked: Vec<Reservation> = noise
            .iter()
            .map(|&(day, idx)| {
                Reservation::builder("Noise", date(day + 1), other_slots[idx]).build().unwrap()
            })
            .collect();
        for i in 0..capacity {
            booked.push(
                Reservation::builder(format!("Guest {i}"), target_date, target_slot)
                    .build()
                    .unwrap(),
            );
        }

        prop_assert!(!can_book(&booked, target_date, target_slot, None, capacity));

        let removed = booked
            .iter()
            .rposition(|r| r.date() == target_date && r.start() == target_slot)
            .unwrap();
        let edited = booked[removed].id().clone();
        prop_assert!(can_book(&booked, target_date, target_slot, Some(&edited), capacity));

        booked.remove(removed);
        prop_assert!(can_book(&booked, target_date, target_slot, None, capacity));
    }

    // Excluding an id removes at most one from the count
    #[test]
    fn exclusion_removes_at_most_one(n in 0usize..20, pick in 0usize..20) {
        let d = date(1);
        let s: TimeSlot = "12:00".parse().unwrap();
        let booked: Vec<Reservation> = (0..n)
            .map(|i| Reservation::builder(format!("G{i}"), d, s).build().unwrap())
            .collect();

        let total = count_at_slot(&booked, d, s, None);
        prop_assert_eq!(total, n);
        if let Some(r) = booked.get(pick) {
            prop_assert_eq!(count_at_slot(&booked, d, s, Some(r.id())), n - 1);
        }
    }
}
