//! Inbound events as the transport hands them to the dispatcher.

use std::collections::HashMap;

use serde::Deserialize;

/// A platform user as seen in an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRef {
    pub identity: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserRef {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// Value of a command option: either a user mention or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    User(UserRef),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub interaction_id: String,
    pub caller: UserRef,
    /// Whether the caller holds the platform's operator role
    #[serde(default)]
    pub caller_has_operator_role: bool,
    #[serde(default)]
    pub arguments: HashMap<String, ArgumentValue>,
}

impl Command {
    pub fn new(name: impl Into<String>, caller: UserRef) -> Self {
        Self {
            name: name.into(),
            interaction_id: String::new(),
            caller,
            caller_has_operator_role: false,
            arguments: HashMap::new(),
        }
    }

    pub fn with_interaction_id(mut self, interaction_id: impl Into<String>) -> Self {
        self.interaction_id = interaction_id.into();
        self
    }

    pub fn as_operator(mut self) -> Self {
        self.caller_has_operator_role = true;
        self
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.arguments
            .insert(name.to_string(), ArgumentValue::Text(value.into()));
        self
    }

    pub fn with_user(mut self, name: &str, user: UserRef) -> Self {
        self.arguments
            .insert(name.to_string(), ArgumentValue::User(user));
        self
    }

    /// Trimmed text argument. Blank text reads as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.arguments.get(name) {
            Some(ArgumentValue::Text(value)) => Some(value.trim()).filter(|v| !v.is_empty()),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<UserRef> {
        match self.arguments.get(name) {
            Some(ArgumentValue::User(user)) => Some(user.clone()),
            // a bare identity string is accepted as a user reference
            Some(ArgumentValue::Text(identity)) if !identity.trim().is_empty() => {
                Some(UserRef::new(identity.trim()))
            }
            _ => None,
        }
    }
}

/// Answer to a guided selector prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionResponse {
    pub correlation_token: String,
    pub caller: UserRef,
    #[serde(default)]
    pub selected_values: Vec<String>,
}

impl SelectionResponse {
    pub fn new(correlation_token: impl Into<String>, caller: UserRef, values: &[&str]) -> Self {
        Self {
            correlation_token: correlation_token.into(),
            caller,
            selected_values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    Command(Command),
    Selection(SelectionResponse),
}

impl InboundEvent {
    pub fn caller(&self) -> &UserRef {
        match self {
            Self::Command(cmd) => &cmd.caller,
            Self::Selection(sel) => &sel.caller,
        }
    }

    /// Id the reply is correlated with
    pub fn correlation_id(&self) -> &str {
        match self {
            Self::Command(cmd) => &cmd.interaction_id,
            Self::Selection(sel) => &sel.correlation_token,
        }
    }

    pub fn handler_name(&self) -> String {
        match self {
            Self::Command(cmd) => cmd.name.clone(),
            Self::Selection(_) => "selection".to_string(),
        }
    }
}

impl From<Command> for InboundEvent {
    fn from(cmd: Command) -> Self {
        Self::Command(cmd)
    }
}

impl From<SelectionResponse> for InboundEvent {
    fn from(sel: SelectionResponse) -> Self {
        Self::Selection(sel)
    }
}
