//! Transport-neutral reply descriptors.

use tzd_core::SelectorKind;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Info,
    Warning,
    Success,
    Error,
    Profile,
}

impl ColorTag {
    /// 24-bit RGB value for transports that render colours
    pub fn rgb(&self) -> u32 {
        match self {
            Self::Info => 0x0099FF,
            Self::Warning => 0xFFA500,
            Self::Success => 0x00FF00,
            Self::Error => 0xFF0000,
            Self::Profile => 0x6A5ACD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptOption {
    pub label: String,
    pub value: String,
}

/// A selector the transport should show, answered with `token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPrompt {
    pub token: String,
    pub kind: SelectorKind,
    pub placeholder: String,
    pub min_values: usize,
    pub max_values: usize,
    pub options: Vec<PromptOption>,
}

/// Everything a transport needs to render one reply.
///
/// `ephemeral` replies are shown to the caller only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableResult {
    pub title: String,
    pub description: Option<String>,
    pub color: ColorTag,
    pub fields: Vec<Field>,
    pub ephemeral: bool,
    pub prompt: Option<SelectionPrompt>,
}

impl RenderableResult {
    /// Caller-private result with no body
    pub fn new(title: impl Into<String>, color: ColorTag) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
            ephemeral: true,
            prompt: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn broadcast(mut self) -> Self {
        self.ephemeral = false;
        self
    }

    pub fn prompt(mut self, prompt: SelectionPrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
