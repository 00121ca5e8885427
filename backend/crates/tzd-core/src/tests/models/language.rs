use crate::{
    CoreError, LANGUAGES, LanguageCatalog, MAX_SELECTED_LANGUAGES, join_languages,
    split_languages,
};

use googletest::prelude::*;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_join_uses_comma_space_separator() {
    assert_eq!(join_languages(&["German", "French"]), "German, French");
    assert_eq!(join_languages(&["English"]), "English");
}

#[test]
fn test_split_reverses_join_and_keeps_order() {
    let joined = join_languages(&["Korean", "English", "Hindi"]);
    assert_eq!(split_languages(&joined), vec!["Korean", "English", "Hindi"]);
    assert!(split_languages("").is_empty());
}

#[test]
fn test_catalog_contains_all_languages() {
    assert_eq!(LANGUAGES.len(), 25);
    assert!(LanguageCatalog::contains("Hungarian"));
    assert!(!LanguageCatalog::contains("Klingon"));
    assert!(!LanguageCatalog::contains("english"));
}

#[test]
fn given_valid_selection_when_validate_then_preserves_order() {
    let result = LanguageCatalog::validate_selection(&owned(&["German", "French"]));
    assert_that!(result, ok(eq(&owned(&["German", "French"]))));
}

#[test]
fn given_duplicates_when_validate_then_first_occurrence_wins() {
    let result = LanguageCatalog::validate_selection(&owned(&["French", "German", "French"]));
    assert_that!(result, ok(eq(&owned(&["French", "German"]))));
}

#[test]
fn given_empty_selection_when_validate_then_empty_selection_error() {
    let result = LanguageCatalog::validate_selection(&[]);
    assert!(matches!(result, Err(CoreError::EmptySelection { .. })));
}

#[test]
fn given_unknown_language_when_validate_then_invalid_language_error() {
    let result = LanguageCatalog::validate_selection(&owned(&["English", "Elvish"]));
    match result {
        Err(CoreError::InvalidLanguage { value, .. }) => assert_eq!(value, "Elvish"),
        other => panic!("expected InvalidLanguage, got {other:?}"),
    }
}

#[test]
fn given_six_languages_when_validate_then_too_many_error() {
    let values = owned(&LANGUAGES[..MAX_SELECTED_LANGUAGES + 1]);
    let result = LanguageCatalog::validate_selection(&values);
    assert!(matches!(
        result,
        Err(CoreError::TooManyLanguages { count: 6, max: 5, .. })
    ));
}

#[test]
fn given_five_languages_when_validate_then_ok() {
    let values = owned(&LANGUAGES[..MAX_SELECTED_LANGUAGES]);
    let selected = LanguageCatalog::validate_selection(&values).unwrap();
    assert_that!(selected.len(), eq(5));
}
