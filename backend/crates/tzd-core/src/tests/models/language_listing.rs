use crate::{LanguageListing, UserRecord};

fn record(identity: &str, timezone: Option<&str>, is_operator: bool) -> UserRecord {
    UserRecord {
        identity: identity.to_string(),
        timezone: timezone.map(str::to_string),
        languages: Some("English".to_string()),
        is_operator,
    }
}

fn ids(records: &[UserRecord]) -> Vec<&str> {
    records.iter().map(|r| r.identity.as_str()).collect()
}

#[test]
fn test_operators_and_members_are_partitioned() {
    let listing = LanguageListing::from_records(vec![
        record("m1", Some("UTC+01:00"), false),
        record("o1", Some("UTC+01:00"), true),
        record("m2", Some("UTC+02:00"), false),
    ]);

    assert_eq!(ids(&listing.operators), vec!["o1"]);
    assert_eq!(ids(&listing.members), vec!["m1", "m2"]);
    assert_eq!(listing.total(), 3);
    assert!(!listing.is_empty());
}

#[test]
fn test_each_partition_uses_lexical_timezone_order() {
    let listing = LanguageListing::from_records(vec![
        record("a", Some("UTC-05:00"), false),
        record("b", Some("UTC+10:00"), false),
        record("c", None, false),
        record("d", Some("UTC+02:00"), false),
    ]);

    // '+' sorts before '-', unset first
    assert_eq!(ids(&listing.members), vec!["c", "d", "b", "a"]);
}

#[test]
fn test_ties_keep_input_order() {
    let listing = LanguageListing::from_records(vec![
        record("x", Some("UTC+01:00"), true),
        record("y", Some("UTC+01:00"), true),
        record("z", Some("UTC+01:00"), true),
    ]);

    assert_eq!(ids(&listing.operators), vec!["x", "y", "z"]);
}

#[test]
fn test_empty_listing() {
    let listing = LanguageListing::from_records(Vec::new());
    assert!(listing.is_empty());
    assert_eq!(listing, LanguageListing::default());
}
