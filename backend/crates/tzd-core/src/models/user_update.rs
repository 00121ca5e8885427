use crate::UserRecord;

/// Field-presence map for a partial write.
///
/// `None` means "leave the stored value alone". Empty strings are treated as
/// absent, so a blank optional argument never clears a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub timezone: Option<String>,
    pub languages: Option<String>,
    pub is_operator: Option<bool>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = non_blank(timezone.into());
        self
    }

    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = non_blank(languages.into());
        self
    }

    pub fn operator(mut self, is_operator: bool) -> Self {
        self.is_operator = Some(is_operator);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.timezone.is_none() && self.languages.is_none() && self.is_operator.is_none()
    }

    /// Apply the present fields to `record`, leaving the rest untouched.
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(ref timezone) = self.timezone {
            record.timezone = Some(timezone.clone());
        }
        if let Some(ref languages) = self.languages {
            record.languages = Some(languages.clone());
        }
        if let Some(is_operator) = self.is_operator {
            record.is_operator = is_operator;
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
