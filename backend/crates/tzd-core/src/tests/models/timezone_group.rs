use crate::{NOT_SET_BUCKET, TIMEZONES, TimezoneKey, UserRecord, group_by_timezone};

fn record(identity: &str, timezone: Option<&str>) -> UserRecord {
    UserRecord {
        identity: identity.to_string(),
        timezone: timezone.map(str::to_string),
        languages: None,
        is_operator: true,
    }
}

fn labels(records: Vec<UserRecord>) -> Vec<String> {
    group_by_timezone(records)
        .into_iter()
        .map(|g| g.label)
        .collect()
}

#[test]
fn test_groups_are_ordered_by_numeric_offset_with_not_set_last() {
    let records = vec![
        record("a", Some("UTC-08:00")),
        record("b", Some("UTC+05:30")),
        record("c", Some("UTC+00:00")),
        record("d", None),
    ];

    assert_eq!(
        labels(records),
        vec!["UTC-08:00", "UTC+00:00", "UTC+05:30", NOT_SET_BUCKET]
    );
}

#[test]
fn test_not_set_is_last_even_when_seen_first() {
    let records = vec![
        record("a", None),
        record("b", Some("UTC+11:00")),
        record("c", Some("UTC-12:00")),
    ];

    assert_eq!(labels(records), vec!["UTC-12:00", "UTC+11:00", NOT_SET_BUCKET]);
}

#[test]
fn test_lexical_order_is_not_used() {
    // Lexically "UTC+..." sorts before "UTC-..."
    let records = vec![
        record("a", Some("UTC+01:00")),
        record("b", Some("UTC-01:00")),
        record("c", Some("UTC+10:00")),
        record("d", Some("UTC+02:00")),
    ];

    assert_eq!(
        labels(records),
        vec!["UTC-01:00", "UTC+01:00", "UTC+02:00", "UTC+10:00"]
    );
}

#[test]
fn test_unparseable_labels_sort_after_offsets_but_before_not_set() {
    let records = vec![
        record("a", None),
        record("b", Some("Mars/Olympus")),
        record("c", Some("UTC+03:00")),
    ];

    assert_eq!(
        labels(records),
        vec!["UTC+03:00", "Mars/Olympus", NOT_SET_BUCKET]
    );
}

#[test]
fn test_equal_offsets_keep_first_seen_order() {
    let records = vec![
        record("a", Some("UTC+05:00")),
        record("b", Some("UTC+5")),
        record("c", Some("UTC-02:00")),
    ];

    assert_eq!(labels(records), vec!["UTC-02:00", "UTC+05:00", "UTC+5"]);
}

#[test]
fn test_members_keep_lookup_order_within_group() {
    let records = vec![
        record("zed", Some("UTC+01:00")),
        record("amy", Some("UTC+02:00")),
        record("bob", Some("UTC+01:00")),
        record("cat", Some("UTC+01:00")),
    ];

    let groups = group_by_timezone(records);

    assert_eq!(groups.len(), 2);
    let ids: Vec<&str> = groups[0]
        .members
        .iter()
        .map(|r| r.identity.as_str())
        .collect();
    assert_eq!(ids, vec!["zed", "bob", "cat"]);
}

#[test]
fn test_empty_input_gives_no_groups() {
    assert!(group_by_timezone(Vec::new()).is_empty());
}

#[test]
fn test_timezone_key_ordering() {
    assert!(TimezoneKey::Offset(-720) < TimezoneKey::Offset(0));
    assert!(TimezoneKey::Offset(840) < TimezoneKey::Unsortable);
    assert!(TimezoneKey::Unsortable < TimezoneKey::NotSet);
    assert_eq!(TimezoneKey::for_label(NOT_SET_BUCKET), TimezoneKey::NotSet);
    assert_eq!(TimezoneKey::for_label("UTC+05:30"), TimezoneKey::Offset(330));
}

#[test]
fn test_catalog_values_key_on_catalog_offset() {
    for tz in TIMEZONES {
        assert_eq!(
            TimezoneKey::for_label(tz.value),
            TimezoneKey::Offset(tz.offset_minutes),
            "{}",
            tz.value
        );
    }
    // Off-catalog labels still sort by their parsed offset
    assert_eq!(TimezoneKey::for_label("UTC+14:00"), TimezoneKey::Offset(840));
    assert_eq!(TimezoneKey::for_label("UTC+5"), TimezoneKey::Offset(300));
    assert_eq!(TimezoneKey::for_label("Mars/Olympus"), TimezoneKey::Unsortable);
}
