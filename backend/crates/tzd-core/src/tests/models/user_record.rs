use crate::{NOT_SET, UserRecord};

#[test]
fn test_user_record_new_has_nothing_set() {
    let record = UserRecord::new("U1");

    assert_eq!(record.identity, "U1");
    assert_eq!(record.timezone, None);
    assert_eq!(record.languages, None);
    assert!(!record.is_operator);
    assert_eq!(record.timezone_or_not_set(), NOT_SET);
    assert_eq!(record.languages_or_not_set(), NOT_SET);
    assert!(record.language_list().is_empty());
}

#[test]
fn test_language_list_splits_stored_value() {
    let mut record = UserRecord::new("U1");
    record.languages = Some("German, French".to_string());

    assert_eq!(record.language_list(), vec!["German", "French"]);
}

#[test]
fn test_role_label() {
    let mut record = UserRecord::new("U1");
    assert_eq!(record.role_label(), "Member");

    record.is_operator = true;
    assert_eq!(record.role_label(), "Moderator");
}
