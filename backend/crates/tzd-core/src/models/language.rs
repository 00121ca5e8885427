use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Separator used when persisting a language list. Existing rows depend on it.
pub const LANGUAGE_SEPARATOR: &str = ", ";

/// Upper bound for the guided language selector
pub const MAX_SELECTED_LANGUAGES: usize = 5;

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Russian",
    "Chinese",
    "Japanese",
    "Korean",
    "Arabic",
    "Hindi",
    "Dutch",
    "Turkish",
    "Polish",
    "Ukrainian",
    "Greek",
    "Hebrew",
    "Swedish",
    "Norwegian",
    "Danish",
    "Finnish",
    "Czech",
    "Romanian",
    "Hungarian",
];

pub struct LanguageCatalog;

impl LanguageCatalog {
    pub fn options() -> &'static [&'static str] {
        LANGUAGES
    }

    pub fn contains(language: &str) -> bool {
        LANGUAGES.contains(&language)
    }

    /// Validate a guided-selector response.
    ///
    /// The selection must be non-empty, drawn from the catalog and hold at
    /// most [`MAX_SELECTED_LANGUAGES`] distinct values. Duplicates are dropped,
    /// first occurrence wins.
    #[track_caller]
    pub fn validate_selection(values: &[String]) -> CoreErrorResult<Vec<String>> {
        if values.is_empty() {
            return Err(CoreError::EmptySelection {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut selected: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !Self::contains(value) {
                return Err(CoreError::InvalidLanguage {
                    value: value.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !selected.contains(value) {
                selected.push(value.clone());
            }
        }

        if selected.len() > MAX_SELECTED_LANGUAGES {
            return Err(CoreError::TooManyLanguages {
                count: selected.len(),
                max: MAX_SELECTED_LANGUAGES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(selected)
    }
}

pub fn join_languages<S: AsRef<str>>(languages: &[S]) -> String {
    languages
        .iter()
        .map(|lang| lang.as_ref())
        .collect::<Vec<&str>>()
        .join(LANGUAGE_SEPARATOR)
}

pub fn split_languages(joined: &str) -> Vec<&str> {
    joined
        .split(LANGUAGE_SEPARATOR)
        .filter(|lang| !lang.is_empty())
        .collect()
}
