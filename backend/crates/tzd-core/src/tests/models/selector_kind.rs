use crate::SelectorKind;

use std::str::FromStr;

#[test]
fn test_selector_kind_as_str() {
    assert_eq!(SelectorKind::Timezone.as_str(), "timezone_select");
    assert_eq!(SelectorKind::Languages.as_str(), "language_select");
}

#[test]
fn test_selector_kind_from_str() {
    assert_eq!(
        SelectorKind::from_str("timezone_select").unwrap(),
        SelectorKind::Timezone
    );
    assert_eq!(
        SelectorKind::from_str("language_select").unwrap(),
        SelectorKind::Languages
    );
    assert!(SelectorKind::from_str("colour_select").is_err());
}
