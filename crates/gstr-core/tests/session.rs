//! Tests for the session store and the readiness check.

use gstr_core::{
    BuildError, DataSet, MonthOfQuarter, SessionError, SessionStore, Slot, can_generate,
    check_ready,
};
use gstr_model::{FilingForm, FrequencyType, RawRow};
use proptest::prelude::*;

fn rows(values: &[&str]) -> Vec<RawRow> {
    values
        .iter()
        .map(|value| RawRow::new().with("txval", *value))
        .collect()
}

fn fill(store: &mut SessionStore) {
    for slot in Slot::all_for(store.frequency()) {
        store
            .set_data(slot, DataSet::new(slot.to_string(), rows(&["1"])))
            .unwrap();
    }
}

fn monthly_form() -> FilingForm {
    FilingForm::new()
        .with_frequency(FrequencyType::Monthly)
        .with_period("9")
        .with_year(2024)
        .with_taxpayer("27AAPFU0939F1ZV")
}

#[test]
fn new_store_is_empty() {
    let store = SessionStore::new(FrequencyType::Monthly);
    assert!(!store.is_complete());
    assert_eq!(store.missing_slots(), vec![Slot::Forward, Slot::Reverse]);
    assert_eq!(store.forward_rows().count(), 0);
}

#[test]
fn set_data_replaces_the_slot() {
    let mut store = SessionStore::new(FrequencyType::Monthly);
    store
        .set_data(Slot::Forward, DataSet::new("first.csv", rows(&["1", "2"])))
        .unwrap();
    store
        .set_data(Slot::Forward, DataSet::new("second.csv", rows(&["3"])))
        .unwrap();
    let data = store.data(Slot::Forward).unwrap();
    assert_eq!(data.source, "second.csv");
    assert_eq!(data.len(), 1);
}

#[test]
fn slots_of_the_other_mode_are_rejected() {
    let mut store = SessionStore::new(FrequencyType::Monthly);
    let err = store
        .set_data(
            Slot::QuarterForward(MonthOfQuarter::FIRST),
            DataSet::default(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::SlotNotInMode {
            slot: Slot::QuarterForward(MonthOfQuarter::FIRST),
            mode: FrequencyType::Monthly,
        }
    );

    let mut store = SessionStore::new(FrequencyType::Quarterly);
    assert!(store.set_data(Slot::Reverse, DataSet::default()).is_err());
}

#[test]
fn empty_data_sets_count_as_uploaded() {
    let mut store = SessionStore::new(FrequencyType::Monthly);
    store.set_data(Slot::Forward, DataSet::default()).unwrap();
    store.set_data(Slot::Reverse, DataSet::default()).unwrap();
    assert!(store.is_complete());
}

#[test]
fn reset_keeps_the_mode() {
    let mut store = SessionStore::new(FrequencyType::Quarterly);
    fill(&mut store);
    assert!(store.is_complete());
    store.reset();
    assert_eq!(store.frequency(), FrequencyType::Quarterly);
    assert_eq!(store.missing_slots().len(), 6);
}

#[test]
fn setting_the_same_frequency_keeps_data() {
    let mut store = SessionStore::new(FrequencyType::Monthly);
    fill(&mut store);
    store.set_frequency(FrequencyType::Monthly);
    assert!(store.is_complete());
}

#[test]
fn quarterly_rows_follow_calendar_order() {
    let mut store = SessionStore::new(FrequencyType::Quarterly);
    // Uploaded out of order on purpose.
    for (month, value) in [(2, "30"), (0, "10"), (1, "20")] {
        let month = MonthOfQuarter::new(month).unwrap();
        store
            .set_data(Slot::QuarterForward(month), DataSet::new("f", rows(&[value])))
            .unwrap();
        store
            .set_data(Slot::QuarterReverse(month), DataSet::new("r", Vec::new()))
            .unwrap();
    }
    let values: Vec<String> = store
        .forward_rows()
        .filter_map(|row| row.text("txval"))
        .collect();
    assert_eq!(values, vec!["10", "20", "30"]);
}

#[test]
fn readiness_needs_form_mode_and_data() {
    let mut store = SessionStore::new(FrequencyType::Monthly);
    let form = monthly_form();
    assert!(!can_generate(&form, &store));
    assert_eq!(
        check_ready(&form, &store).unwrap_err(),
        BuildError::IncompleteSession {
            missing: vec![Slot::Forward, Slot::Reverse]
        }
    );

    fill(&mut store);
    assert!(can_generate(&form, &store));

    let incomplete = FilingForm::new().with_frequency(FrequencyType::Monthly);
    assert!(matches!(
        check_ready(&incomplete, &store),
        Err(BuildError::Form(_))
    ));

    let quarterly = monthly_form()
        .with_frequency(FrequencyType::Quarterly)
        .with_period("Q2");
    assert_eq!(
        check_ready(&quarterly, &store).unwrap_err(),
        BuildError::FrequencyMismatch {
            selected: FrequencyType::Quarterly,
            session: FrequencyType::Monthly,
        }
    );
}

#[test]
fn incomplete_session_message_lists_slots() {
    let err = BuildError::IncompleteSession {
        missing: vec![
            Slot::QuarterForward(MonthOfQuarter::SECOND),
            Slot::QuarterReverse(MonthOfQuarter::THIRD),
        ],
    };
    assert_eq!(
        err.to_string(),
        "no data uploaded for forward month 2, reverse month 3"
    );
}

fn frequency() -> impl Strategy<Value = FrequencyType> {
    prop_oneof![Just(FrequencyType::Monthly), Just(FrequencyType::Quarterly)]
}

proptest! {
    #[test]
    fn changing_frequency_clears_every_slot(
        start in frequency(),
        populated in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mut store = SessionStore::new(start);
        for (slot, keep) in Slot::all_for(start).into_iter().zip(populated) {
            if keep {
                store.set_data(slot, DataSet::new("x", rows(&["5"]))).unwrap();
            }
        }
        let other = match start {
            FrequencyType::Monthly => FrequencyType::Quarterly,
            FrequencyType::Quarterly => FrequencyType::Monthly,
        };
        store.set_frequency(other);
        prop_assert_eq!(store.frequency(), other);
        prop_assert_eq!(store.missing_slots(), Slot::all_for(other));
        prop_assert_eq!(store.forward_rows().count(), 0);
        prop_assert_eq!(store.reverse_rows().count(), 0);
    }
}
