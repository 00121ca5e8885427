use crate::{TIMEZONES, TimezoneCatalog, parse_utc_offset};

use googletest::prelude::*;

#[test]
fn test_parse_utc_offset_whole_hours() {
    assert_eq!(parse_utc_offset("UTC+00:00"), Some(0));
    assert_eq!(parse_utc_offset("UTC-08:00"), Some(-480));
    assert_eq!(parse_utc_offset("UTC+11:00"), Some(660));
    assert_eq!(parse_utc_offset("UTC-12:00"), Some(-720));
}

#[test]
fn test_parse_utc_offset_fractional_hours() {
    assert_eq!(parse_utc_offset("UTC+05:30"), Some(330));
    assert_eq!(parse_utc_offset("UTC-03:30"), Some(-210));
}

#[test]
fn test_parse_utc_offset_without_minutes() {
    assert_eq!(parse_utc_offset("UTC+5"), Some(300));
    assert_eq!(parse_utc_offset("UTC-10"), Some(-600));
}

#[test]
fn test_parse_utc_offset_rejects_malformed_labels() {
    for label in [
        "Not Set",
        "GMT+01:00",
        "UTC",
        "UTC01:00",
        "UTC+",
        "UTC+1:3",
        "UTC+01:75",
        "UTC+123:00",
        "utc+01:00",
        "UTC+ab:00",
    ] {
        assert_eq!(parse_utc_offset(label), None, "label {label:?}");
    }
}

#[test]
fn test_every_catalog_value_parses_to_its_offset() {
    for tz in TIMEZONES {
        assert_eq!(parse_utc_offset(tz.value), Some(tz.offset_minutes), "{}", tz.value);
    }
}

#[test]
fn test_catalog_is_sorted_and_unique() {
    let offsets: Vec<i32> = TIMEZONES.iter().map(|tz| tz.offset_minutes).collect();
    let mut sorted = offsets.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(offsets, sorted);
    assert_eq!(TIMEZONES.len(), 25);
}

#[test]
fn test_fractional_offset_in_catalog() {
    let ist = TimezoneCatalog::find("UTC+05:30").unwrap();
    assert_eq!(ist.offset_minutes, 330);
    assert_eq!(ist.label, "UTC+5:30 (IST)");
}

#[test]
fn given_catalog_value_when_validate_then_ok() {
    let result = TimezoneCatalog::validate("UTC+01:00");

    assert_that!(result, ok(anything()));
    assert_eq!(result.unwrap(), "UTC+01:00");
}

#[test]
fn given_unknown_value_when_validate_then_err() {
    assert_that!(TimezoneCatalog::validate("UTC+13:00"), err(anything()));
    assert_that!(TimezoneCatalog::validate("UTC+1 (CET)"), err(anything()));
}
