use crate::{UserRecord, UserUpdate};

#[test]
fn test_new_update_is_empty() {
    assert!(UserUpdate::new().is_empty());
    assert!(!UserUpdate::new().operator(false).is_empty());
}

#[test]
fn test_blank_strings_are_treated_as_absent() {
    let update = UserUpdate::new().timezone("").languages("   ");

    assert_eq!(update.timezone, None);
    assert_eq!(update.languages, None);
    assert!(update.is_empty());
}

#[test]
fn test_values_are_trimmed() {
    let update = UserUpdate::new().languages("  English, Tagalog ");
    assert_eq!(update.languages.as_deref(), Some("English, Tagalog"));
}

#[test]
fn test_apply_only_changes_present_fields() {
    let mut record = UserRecord {
        identity: "U1".to_string(),
        timezone: Some("UTC+01:00".to_string()),
        languages: Some("German".to_string()),
        is_operator: true,
    };

    UserUpdate::new().timezone("UTC+02:00").apply_to(&mut record);

    assert_eq!(record.timezone.as_deref(), Some("UTC+02:00"));
    assert_eq!(record.languages.as_deref(), Some("German"));
    assert!(record.is_operator);
}

#[test]
fn test_apply_twice_is_idempotent() {
    let update = UserUpdate::new().languages("Dutch").operator(true);

    let mut once = UserRecord::new("U1");
    update.apply_to(&mut once);

    let mut twice = UserRecord::new("U1");
    update.apply_to(&mut twice);
    update.apply_to(&mut twice);

    assert_eq!(once, twice);
}
