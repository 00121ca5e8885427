use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid timezone: {value} {location}")]
    InvalidTimezone {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid language: {value} {location}")]
    InvalidLanguage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Too many languages: {count} selected (max: {max}) {location}")]
    TooManyLanguages {
        count: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Selection is empty {location}")]
    EmptySelection { location: ErrorLocation },

    #[error("Invalid selector kind: {value} {location}")]
    InvalidSelectorKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
