use tzd_core::CoreError;
use tzd_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Permission denied for {command} {location}")]
    PermissionDenied {
        command: String,
        location: ErrorLocation,
    },

    #[error("Missing filter: {filter} {location}")]
    MissingFilter {
        filter: &'static str,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Selection expired or unknown {location}")]
    SelectionExpired { location: ErrorLocation },

    #[error("Unknown command: {name} {location}")]
    UnknownCommand {
        name: String,
        location: ErrorLocation,
    },
}

impl BotError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::MissingFilter { .. } => "MISSING_FILTER",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::SelectionExpired { .. } => "SELECTION_EXPIRED",
            Self::UnknownCommand { .. } => "UNKNOWN_COMMAND",
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for BotError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        match source {
            DbError::MissingFilter { filter, location } => Self::MissingFilter { filter, location },
            source => Self::Storage {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Core validation errors carry source locations in their `Display`; the
/// message kept here is the one shown to the caller.
impl From<CoreError> for BotError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let (message, field) = match err {
            CoreError::InvalidTimezone { value, .. } => {
                (format!("Unknown timezone: {value}"), "timezone")
            }
            CoreError::InvalidLanguage { value, .. } => {
                (format!("Unknown language: {value}"), "languages")
            }
            CoreError::TooManyLanguages { max, .. } => {
                (format!("Choose at most {max} languages"), "languages")
            }
            CoreError::EmptySelection { .. } => {
                ("Select at least one option".to_string(), "values")
            }
            CoreError::InvalidSelectorKind { value, .. } => {
                (format!("Unknown selector: {value}"), "kind")
            }
        };

        Self::Validation {
            message,
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
