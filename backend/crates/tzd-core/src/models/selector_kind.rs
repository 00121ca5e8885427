use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which guided selector a pending prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// Single choice from the timezone catalog
    Timezone,
    /// One to five choices from the language catalog
    Languages,
}

impl SelectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timezone => "timezone_select",
            Self::Languages => "language_select",
        }
    }
}

impl FromStr for SelectorKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "timezone_select" => Ok(Self::Timezone),
            "language_select" => Ok(Self::Languages),
            _ => Err(CoreError::InvalidSelectorKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
