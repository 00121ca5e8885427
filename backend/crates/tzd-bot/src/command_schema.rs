//! Command definitions published to the transport at startup.

use crate::CommandName;

use tzd_core::{LanguageCatalog, TimezoneCatalog};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    String,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    pub name: &'static str,
    pub kind: OptionKind,
    pub description: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
}

impl CommandOption {
    fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::String,
            description,
            required: false,
            choices: Vec::new(),
        }
    }

    fn user(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::User,
            description,
            required: true,
            choices: Vec::new(),
        }
    }

    fn with_timezone_choices(mut self) -> Self {
        self.choices = TimezoneCatalog::options()
            .iter()
            .map(|tz| OptionChoice {
                name: tz.label.to_string(),
                value: tz.value.to_string(),
            })
            .collect();
        self
    }

    fn with_language_choices(mut self) -> Self {
        self.choices = LanguageCatalog::options()
            .iter()
            .map(|lang| OptionChoice {
                name: lang.to_string(),
                value: lang.to_string(),
            })
            .collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandDefinition {
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

pub fn command_definitions() -> Vec<CommandDefinition> {
    CommandName::ALL.into_iter().map(definition).collect()
}

fn definition(name: CommandName) -> CommandDefinition {
    let (description, options) = match name {
        CommandName::SetTimezone => (
            "Set or edit your timezone using a dropdown menu",
            Vec::new(),
        ),
        CommandName::SetLanguage => ("Set or edit the languages you speak", Vec::new()),
        CommandName::Profile => (
            "View your own timezone and language information",
            Vec::new(),
        ),
        CommandName::ListModsByTimezone => (
            "List moderators filtered by timezone",
            vec![
                CommandOption::text("timezone", "Filter moderators by timezone")
                    .with_timezone_choices(),
            ],
        ),
        CommandName::ListUsersByLanguage => (
            "List users filtered by language",
            vec![
                CommandOption::text("language", "Filter users by language")
                    .with_language_choices(),
            ],
        ),
        CommandName::SetMod => (
            "Set a user as moderator with timezone and languages",
            vec![
                CommandOption::user("user", "The user to set as moderator"),
                CommandOption::text("timezone", "The moderator's timezone")
                    .with_timezone_choices(),
                CommandOption::text("languages", "The moderator's languages"),
            ],
        ),
        CommandName::RemoveMod => (
            "Remove moderator status from a user",
            vec![CommandOption::user("user", "The user to remove as moderator")],
        ),
    };

    CommandDefinition {
        name: name.as_str(),
        description,
        options,
    }
}
