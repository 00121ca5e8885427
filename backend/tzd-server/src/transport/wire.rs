use tzd_bot::{
    ArgumentValue, Command, CommandDefinition, InboundEvent, RenderableResult, SelectionResponse,
    UserRef,
};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One inbound line.
///
/// Commands carry the caller's platform role ids; the operator marker is
/// derived from them here, not trusted from the line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireInbound {
    Command {
        name: String,
        #[serde(default)]
        interaction_id: String,
        caller: UserRef,
        #[serde(default)]
        role_ids: Vec<String>,
        #[serde(default)]
        arguments: HashMap<String, ArgumentValue>,
    },
    Selection {
        correlation_token: String,
        caller: UserRef,
        #[serde(default)]
        selected_values: Vec<String>,
    },
}

impl WireInbound {
    pub fn into_event(self, operator_role_id: Option<&str>) -> InboundEvent {
        match self {
            Self::Command {
                name,
                interaction_id,
                caller,
                role_ids,
                arguments,
            } => InboundEvent::Command(Command {
                name,
                interaction_id,
                caller,
                caller_has_operator_role: operator_role_id
                    .is_some_and(|role| role_ids.iter().any(|r| r == role)),
                arguments,
            }),
            Self::Selection {
                correlation_token,
                caller,
                selected_values,
            } => InboundEvent::Selection(SelectionResponse {
                correlation_token,
                caller,
                selected_values,
            }),
        }
    }
}

/// One outbound line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireOutbound {
    RegisterCommands {
        commands: Vec<CommandDefinition>,
    },
    Reply {
        correlation_id: String,
        color_rgb: u32,
        result: RenderableResult,
    },
    /// A line that could not be decoded
    Rejected {
        message: String,
    },
}

impl WireOutbound {
    pub fn reply(correlation_id: impl Into<String>, result: RenderableResult) -> Self {
        Self::Reply {
            correlation_id: correlation_id.into(),
            color_rgb: result.color.rgb(),
            result,
        }
    }
}
