//! Template record and identifier.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{Error, Result};

/// Objective used for freshly created, not yet edited templates.
const UNTITLED_OBJECTIVE: &str = "Help me with the task described in the context below.";

/// Unique identifier for a template.
///
/// Serialized as the hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(Uuid);

impl TemplateId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TemplateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| Error::InvalidInput(format!("invalid template id '{s}': {e}")))
    }
}

/// A reusable prompt blueprint.
///
/// Fields fall into two groups:
///
/// - **Organizational**: `name`, `summary`, `icon_token`, `internal_note`.
///   These describe the template in a list and are never rendered.
/// - **Guidance**: `objective` through `examples`. These drive
///   [`render_prompt`](crate::render_prompt).
///
/// Every text field defaults to empty when missing or `null` in stored JSON,
/// and a missing or `null` `id` is replaced with a fresh one, so older or
/// hand-edited files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier, immutable after creation.
    #[serde(default = "TemplateId::generate", deserialize_with = "id_or_generate")]
    pub id: TemplateId,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Short description shown in the list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    /// Symbolic icon reference (for example an SF Symbols name).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon_token: String,
    /// UI-only annotation describing what the template is for.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub internal_note: String,
    /// Channel or environment, for example "Slack message" or "Email".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub channel_or_environment: String,
    /// Primary instruction; the first line of the rendered prompt.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub objective: String,
    /// Who the output is for.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audience: String,
    /// Tone and style guidance.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tone_and_style: String,
    /// Length guidance in words, sentences, or free form.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub length_guidance: String,
    /// How the output should be structured.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output_structure: String,
    /// Specific formatting rules.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formatting_rules: String,
    /// Constraints and "do not do" rules.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub constraints: String,
    /// Role for the model, usually starting with "You are".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub persona: String,
    /// Example outputs or stylistic patterns.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub examples: String,
}

/// Decodes a text field, reading `null` as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes an id, generating one for `null`.
fn id_or_generate<'de, D>(deserializer: D) -> std::result::Result<TemplateId, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TemplateId>::deserialize(deserializer)
        .map(|id| id.unwrap_or_else(TemplateId::generate))
}

impl Template {
    /// Creates a template with a fresh id, the given name and objective, and
    /// every other field empty.
    #[must_use]
    pub fn new(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Self {
            id: TemplateId::generate(),
            name: name.into(),
            summary: String::new(),
            icon_token: String::new(),
            internal_note: String::new(),
            channel_or_environment: String::new(),
            objective: objective.into(),
            audience: String::new(),
            tone_and_style: String::new(),
            length_guidance: String::new(),
            output_structure: String::new(),
            formatting_rules: String::new(),
            constraints: String::new(),
            persona: String::new(),
            examples: String::new(),
        }
    }

    /// Starting point for a user-created template.
    #[must_use]
    pub fn untitled() -> Self {
        Self::new("Untitled template", UNTITLED_OBJECTIVE).with_icon_token("doc.text")
    }

    /// Replaces the id.
    #[must_use]
    pub const fn with_id(mut self, id: TemplateId) -> Self {
        self.id = id;
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the icon token.
    #[must_use]
    pub fn with_icon_token(mut self, icon_token: impl Into<String>) -> Self {
        self.icon_token = icon_token.into();
        self
    }

    /// Sets the internal note.
    #[must_use]
    pub fn with_internal_note(mut self, note: impl Into<String>) -> Self {
        self.internal_note = note.into();
        self
    }

    /// Sets the channel or environment.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel_or_environment = channel.into();
        self
    }

    /// Sets the objective.
    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// Sets the audience.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Sets the tone and style guidance.
    #[must_use]
    pub fn with_tone_and_style(mut self, tone: impl Into<String>) -> Self {
        self.tone_and_style = tone.into();
        self
    }

    /// Sets the length guidance.
    #[must_use]
    pub fn with_length_guidance(mut self, length: impl Into<String>) -> Self {
        self.length_guidance = length.into();
        self
    }

    /// Sets the output structure.
    #[must_use]
    pub fn with_output_structure(mut self, structure: impl Into<String>) -> Self {
        self.output_structure = structure.into();
        self
    }

    /// Sets the formatting rules.
    #[must_use]
    pub fn with_formatting_rules(mut self, rules: impl Into<String>) -> Self {
        self.formatting_rules = rules.into();
        self
    }

    /// Sets the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// Sets the persona.
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Sets the examples.
    #[must_use]
    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }
}
