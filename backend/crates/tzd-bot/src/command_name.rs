use crate::{BotError, Result as BotErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    SetTimezone,
    SetLanguage,
    Profile,
    ListModsByTimezone,
    ListUsersByLanguage,
    SetMod,
    RemoveMod,
}

impl CommandName {
    pub const ALL: [CommandName; 7] = [
        Self::SetTimezone,
        Self::SetLanguage,
        Self::Profile,
        Self::ListModsByTimezone,
        Self::ListUsersByLanguage,
        Self::SetMod,
        Self::RemoveMod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetTimezone => "set-timezone",
            Self::SetLanguage => "set-language",
            Self::Profile => "profile",
            Self::ListModsByTimezone => "list-mods-by-timezone",
            Self::ListUsersByLanguage => "list-users-by-language",
            Self::SetMod => "set-mod",
            Self::RemoveMod => "remove-mod",
        }
    }

    /// Commands gated on the caller's operator role
    pub fn requires_operator(&self) -> bool {
        matches!(
            self,
            Self::ListModsByTimezone | Self::ListUsersByLanguage | Self::SetMod | Self::RemoveMod
        )
    }
}

impl FromStr for CommandName {
    type Err = BotError;

    #[track_caller]
    fn from_str(s: &str) -> BotErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BotError::UnknownCommand {
                name: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
