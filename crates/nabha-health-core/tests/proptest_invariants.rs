//! Property-based invariant tests for the resolver and the entity filter.
//!
//! 1. Keys absent from a table resolve to themselves
//! 2. Resolution is idempotent
//! 3. Keys present in any table resolve to non-empty text, blank entries included
//! 4. The "all" criterion and the empty query are identities
//! 5. Views for distinct statuses are disjoint and recover their union in order
//! 6. Every view is an order-preserving subsequence of its source
//! 7. Status updates keep length, order and every other record

use chrono::NaiveDate;
use nabha_health_core::filter::{self, Criterion, Filterable, ALL};
use nabha_health_core::i18n::{Catalog, Language};
use nabha_health_core::models::{Appointment, AppointmentStatus, AppointmentType, Medicine};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Hi)]
}

fn status_strategy() -> impl Strategy<Value = AppointmentStatus> {
    prop::sample::select(AppointmentStatus::ALL.to_vec())
}

/// Appointments with unique ids "0".."n" and arbitrary statuses.
fn appointments_strategy() -> impl Strategy<Value = Vec<Appointment>> {
    prop::collection::vec((status_strategy(), "[A-Za-z .]{0,16}"), 0..24).prop_map(|rows| {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, doctor))| {
                let mut a = Appointment::new(i.to_string(), date, doctor, AppointmentType::Video);
                a.status = status;
                a
            })
            .collect()
    })
}

fn medicines_strategy() -> impl Strategy<Value = Vec<Medicine>> {
    prop::collection::vec(("[A-Za-z0-9 ]{0,16}", "[A-Za-z]{0,12}"), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, generic))| Medicine::new(i.to_string(), name, generic))
            .collect()
    })
}

fn criterion_strategy() -> impl Strategy<Value = Criterion> {
    prop_oneof![
        Just(Criterion::All),
        prop::sample::select(vec!["all", "upcoming", "completed", "cancelled", "unknown"])
            .prop_map(|v| Criterion::equals("status", v)),
        "[a-zA-Z. ]{0,4}".prop_map(|q| Criterion::contains(["doctor", "specialty", "notes"], q)),
    ]
}

/// True if `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}

fn ids<T: Filterable>(records: &[T]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}

// ── Resolver ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn absent_key_resolves_to_itself(
        language in language_strategy(),
        key in "[a-z]{1,10}\\.[a-zA-Z]{1,16}",
    ) {
        let catalog = Catalog::builtin();
        prop_assume!(catalog.table(language).map_or(true, |t| !t.contains(&key)));
        prop_assert_eq!(catalog.resolve(language, &key), key.as_str());
        prop_assert!(catalog.lookup(language, &key).is_missing());
    }

    #[test]
    fn resolve_is_idempotent(
        language in language_strategy(),
        key in prop_oneof![
            Just("home.title".to_string()),
            Just("records.syncOffline".to_string()),
            "\\PC{0,24}",
        ],
    ) {
        let catalog = Catalog::builtin();
        let first = catalog.resolve(language, &key).to_string();
        let second = catalog.resolve(language, &key).to_string();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn shared_keys_resolve_to_text() {
    let catalog = Catalog::builtin();
    let en = catalog.table(Language::En).unwrap();
    let hi = catalog.table(Language::Hi).unwrap();

    for key in en.keys().filter(|k| hi.contains(k)) {
        for language in Language::ALL {
            let text = catalog.resolve(language, key);
            assert!(!text.is_empty(), "{}: {key} is empty", language.code());
        }
    }
}

proptest! {
    #[test]
    fn loaded_tables_never_resolve_blank(
        en in prop::collection::btree_map("[a-z]{1,6}\\.[a-z]{1,6}", "[a-z ]{0,4}", 0..8),
        hi in prop::collection::btree_map("[a-z]{1,6}\\.[a-z]{1,6}", "[a-z ]{0,4}", 0..8),
    ) {
        let json = serde_json::json!({ "en": &en, "hi": &hi }).to_string();
        let catalog = Catalog::from_json_str(&json).unwrap();

        for key in en.keys().chain(hi.keys()) {
            for language in Language::ALL {
                prop_assert!(!catalog.resolve(language, key).is_empty());
            }
        }
    }
}

// ── Entity filter ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn all_is_identity(appointments in appointments_strategy(), medicines in medicines_strategy()) {
        prop_assert_eq!(&filter::filter(&appointments, &Criterion::All).unwrap(), &appointments);
        prop_assert_eq!(
            &filter::filter(&appointments, &Criterion::equals("status", ALL)).unwrap(),
            &appointments
        );
        let empty_query = Criterion::contains(["name", "generic_name"], "");
        prop_assert_eq!(&filter::filter(&medicines, &empty_query).unwrap(), &medicines);
    }

    #[test]
    fn distinct_statuses_partition(
        appointments in appointments_strategy(),
        a in status_strategy(),
        b in status_strategy(),
    ) {
        prop_assume!(a != b);
        let by_status = |s: AppointmentStatus| {
            filter::filter(&appointments, &Criterion::equals("status", s.as_str())).unwrap()
        };
        let left = by_status(a);
        let right = by_status(b);

        let left_ids = ids(&left);
        let right_ids = ids(&right);
        prop_assert!(left_ids.iter().all(|id| !right_ids.contains(id)));

        let expected: Vec<&str> = appointments
            .iter()
            .filter(|r| r.status == a || r.status == b)
            .map(|r| r.id.as_str())
            .collect();
        let union: Vec<&str> = appointments
            .iter()
            .map(|r| r.id.as_str())
            .filter(|id| left_ids.contains(id) || right_ids.contains(id))
            .collect();
        prop_assert_eq!(union, expected);
    }

    #[test]
    fn view_is_ordered_subsequence(
        appointments in appointments_strategy(),
        criterion in criterion_strategy(),
    ) {
        let view = filter::filter(&appointments, &criterion).unwrap();
        prop_assert!(view.len() <= appointments.len());
        prop_assert!(is_subsequence(&ids(&view), &ids(&appointments)));
        prop_assert!(view.iter().all(|r| criterion.matches(r)));
    }

    #[test]
    fn medicine_search_is_case_insensitive(
        medicines in medicines_strategy(),
        query in "[a-zA-Z]{1,4}",
    ) {
        let fields = ["name", "generic_name"];
        let search =
            |q: String| filter::filter(&medicines, &Criterion::contains(fields, q)).unwrap();
        let lower = search(query.to_lowercase());
        let upper = search(query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn cancel_preserves_shape(
        appointments in appointments_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!appointments.is_empty());
        let index = pick.index(appointments.len());
        let id = appointments[index].id.clone();

        let updated = filter::cancel_appointment(&appointments, &id).unwrap();
        prop_assert_eq!(updated.len(), appointments.len());
        prop_assert_eq!(updated[index].status, AppointmentStatus::Cancelled);
        for (i, (before, after)) in appointments.iter().zip(&updated).enumerate() {
            prop_assert_eq!(&before.id, &after.id);
            if i != index {
                prop_assert_eq!(before, after);
            }
        }
    }
}
