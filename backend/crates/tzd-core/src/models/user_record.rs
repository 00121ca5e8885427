//! Directory entry - one per member identity.

use crate::split_languages;

use serde::{Deserialize, Serialize};

/// Placeholder shown for a field that has never been written
pub const NOT_SET: &str = "Not set";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque, stable key supplied by the chat platform
    pub identity: String,
    /// Stored timezone value (`UTC+05:30`), if the member picked one
    pub timezone: Option<String>,
    /// `", "`-joined language list
    pub languages: Option<String>,
    pub is_operator: bool,
}

impl UserRecord {
    /// A record with nothing set, as created by the first write
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            timezone: None,
            languages: None,
            is_operator: false,
        }
    }

    pub fn language_list(&self) -> Vec<&str> {
        self.languages
            .as_deref()
            .map(split_languages)
            .unwrap_or_default()
    }

    pub fn timezone_or_not_set(&self) -> &str {
        self.timezone.as_deref().unwrap_or(NOT_SET)
    }

    pub fn languages_or_not_set(&self) -> &str {
        self.languages.as_deref().unwrap_or(NOT_SET)
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_operator {
            "Moderator"
        } else {
            "Member"
        }
    }
}
