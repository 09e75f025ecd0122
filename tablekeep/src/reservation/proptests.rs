//! Property-based tests for `Reservation` and its field types.

use super::{Reservation, ReservationDate, ReservationId};
use crate::TimeSlot;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = ReservationDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        chrono::NaiveDate::from_ymd_opt(y, m, d)
            .map(ReservationDate::from)
            .unwrap()
    })
}

fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
    (0u16..1440).prop_map(|m| TimeSlot::from_minutes(m).unwrap())
}

fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (
        "[A-Za-z][A-Za-z \"',]{0,20}",
        "[0-9-]{0,12}",
        "[a-z@.]{0,15}",
        1u32..30,
        date_strategy(),
        slot_strategy(),
        "[ -~]{0,30}",
    )
        .prop_map(|(name, phone, email, party, date, start, notes)| {
            Reservation::builder(name, date, start)
                .phone(phone)
                .email(email)
                .party_size(party)
                .notes(notes)
                .build()
                .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Stored JSON reads back as an equal record
    #[test]
    fn json_round_trip(r in reservation_strategy()) {
        let json = serde_json::to_string(&vec![r.clone()]).unwrap();
        let back: Vec<Reservation> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, vec![r]);
    }

    // Dates print in the same form they parse from
    #[test]
    fn date_display_parses_back(date in date_strategy()) {
        let text = date.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.parse::<ReservationDate>().unwrap(), date);
    }

    // Generated ids are never empty and never collide in a small batch
    #[test]
    fn generated_ids_unique(n in 1usize..50) {
        let ids: std::collections::HashSet<ReservationId> =
            (0..n).map(|_| ReservationId::generate()).collect();
        prop_assert_eq!(ids.len(), n);
    }

    // Surrounding whitespace never changes an id
    #[test]
    fn id_is_trimmed(core in "[a-z0-9]{1,16}", pad in " {0,3}") {
        let id = ReservationId::new(format!("{pad}{core}{pad}")).unwrap();
        prop_assert_eq!(id.as_str(), core.as_str());
    }

    // Search matches any substring of the name regardless of case
    #[test]
    fn search_matches_name_substrings(r in reservation_strategy(), start in 0usize..5, len in 1usize..5) {
        let name: Vec<char> = r.name().chars().collect();
        let start = start.min(name.len().saturating_sub(1));
        let end = (start + len).min(name.len());
        let term: String = name[start..end].iter().collect::<String>().to_uppercase();
        prop_assert!(r.matches_search(&term));
    }
}
