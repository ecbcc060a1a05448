//! Property-based tests for eesti-core
//!
//! Uses proptest to verify invariants across randomized inputs

use chrono::{Days, NaiveDate};
use eesti_core::{
    default_documents, guarded_fields, status_on, DocumentStatus, FieldMap, EXPIRY_WARNING_DAYS,
    FIELD_FIRST_NAME, FIELD_LAST_NAME, NAME_FIELDS,
};
use proptest::prelude::*;

/// Generate arbitrary field values, blanks and whitespace included
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZÕÄÖÜõäöü0-9 ]{0,30}").unwrap()
}

/// Generate an edited copy of the default ID-card field map
fn edited_fields_strategy() -> impl Strategy<Value = FieldMap> {
    let labels: Vec<String> = default_documents()[0].fields.keys().cloned().collect();
    prop::collection::vec(value_strategy(), labels.len()).prop_map(move |values| {
        labels.iter().cloned().zip(values).collect()
    })
}

proptest! {
    /// Property: committed name fields are never blank
    #[test]
    fn prop_name_fields_never_blank(edited in edited_fields_strategy()) {
        let prior = default_documents()[0].fields.clone();
        let committed = guarded_fields(&prior, &edited);

        for name in NAME_FIELDS {
            let value = committed.get(name).expect("name field present");
            prop_assert!(!value.trim().is_empty());
        }
    }

    /// Property: a blank name reverts to the prior value, a non-blank one wins
    #[test]
    fn prop_name_guard_per_field(
        last in value_strategy(),
        first in value_strategy(),
    ) {
        let prior = default_documents()[0].fields.clone();
        let mut edited = prior.clone();
        edited.insert(FIELD_LAST_NAME.to_string(), last.clone());
        edited.insert(FIELD_FIRST_NAME.to_string(), first.clone());

        let committed = guarded_fields(&prior, &edited);

        let expect_last = if last.trim().is_empty() { prior.get(FIELD_LAST_NAME).unwrap() } else { &last };
        let expect_first = if first.trim().is_empty() { prior.get(FIELD_FIRST_NAME).unwrap() } else { &first };
        prop_assert_eq!(committed.get(FIELD_LAST_NAME).unwrap(), expect_last);
        prop_assert_eq!(committed.get(FIELD_FIRST_NAME).unwrap(), expect_first);
    }

    /// Property: the guard touches only name fields
    #[test]
    fn prop_guard_leaves_other_fields_alone(edited in edited_fields_strategy()) {
        let prior = default_documents()[0].fields.clone();
        let committed = guarded_fields(&prior, &edited);

        for (label, value) in &edited {
            if !NAME_FIELDS.contains(&label.as_str()) {
                prop_assert_eq!(committed.get(label).unwrap(), value);
            }
        }
    }

    /// Property: status is monotone in the validity date
    #[test]
    fn prop_status_windows(offset in -3650i64..3650) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let valid_until = if offset >= 0 {
            today + Days::new(offset as u64)
        } else {
            today - Days::new((-offset) as u64)
        };

        let status = status_on(valid_until, today);
        if offset < 0 {
            prop_assert_eq!(status, DocumentStatus::Expired);
        } else if offset < EXPIRY_WARNING_DAYS {
            prop_assert_eq!(status, DocumentStatus::ExpiringSoon);
        } else {
            prop_assert_eq!(status, DocumentStatus::Active);
        }
    }
}
