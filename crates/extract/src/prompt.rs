use schema::OutputSchema;
use serde::{Deserialize, Serialize};

use crate::error::PromptError;
use crate::llm::ChatMessage;
use crate::template::{ChatPromptTemplate, MessageTemplate, PromptValues};

pub const DEFAULT_BASE_PROMPT: &str = r#"
Who are the actors, organizations, and artefacts involved in the antiquities trade?

Make sure to provide a valid and well-formatted JSON.

"#;

pub const TEXT_PROMPT: &str = r#"Extract the entities and relationships involved in cultural heritage and art crime from the following text.

Identify the actors, organizations, museums, auction houses, artefacts, and places involved, and how they are related to each other.
Refer to every person by their Forename Surname and to every organization by its full formal name.

{format_instructions}

Make sure to provide a valid and well-formatted JSON.

TEXT:
{text}
"#;

pub const CONTENT_PROMPT: &str = r#"The following document concerns the trade in antiquities and cultural heritage objects.

Extract every entity and relationship it describes, including ownership, sales, purchases, donations, provenance, family ties, and legal actions.

{format_instructions}

Make sure to provide a valid and well-formatted JSON.

DOCUMENT:
{content}
"#;

pub const INGREDIENTS_PROMPT: &str = r#"Extract the entities and relationships involved in cultural heritage and art crime.

SOURCE MATERIAL:
{ingredients}

NOTES FROM PREVIOUS STEPS (may be empty):
{steps}

{format_instructions}

Make sure to provide a valid and well-formatted JSON.
"#;

/// Built-in base prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    Default,
    #[default]
    Text,
    Content,
    Ingredients,
}

impl TemplateVariant {
    pub fn base_prompt(self) -> &'static str {
        match self {
            TemplateVariant::Default => DEFAULT_BASE_PROMPT,
            TemplateVariant::Text => TEXT_PROMPT,
            TemplateVariant::Content => CONTENT_PROMPT,
            TemplateVariant::Ingredients => INGREDIENTS_PROMPT,
        }
    }
}

/// Task-specific substitution values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskInput {
    /// Fills `{text}`.
    Text(String),
    /// Fills `{content}`.
    Content(String),
    /// Fills `{ingredients}` and the optional `{steps}`.
    Ingredients {
        ingredients: String,
        steps: Option<String>,
    },
}

impl TaskInput {
    pub fn values(&self, format_instructions: String) -> PromptValues {
        let values = PromptValues::new().with("format_instructions", format_instructions);
        match self {
            TaskInput::Text(text) => values.with("text", text.as_str()),
            TaskInput::Content(content) => values.with("content", content.as_str()),
            TaskInput::Ingredients { ingredients, steps } => values
                .with("ingredients", ingredients.as_str())
                .with_optional("steps", steps.clone()),
        }
    }
}

/// Render `base_prompt` as a single user message for schema `S`.
pub fn create_prompt<S: OutputSchema>(
    base_prompt: &str,
    input: &TaskInput,
) -> Result<Vec<ChatMessage>, PromptError> {
    render_messages(base_prompt, None, S::format_instructions(), input)
}

/// Render an optional system message followed by `base_prompt` as the user message.
pub fn render_messages(
    base_prompt: &str,
    system_prompt: Option<&str>,
    format_instructions: String,
    input: &TaskInput,
) -> Result<Vec<ChatMessage>, PromptError> {
    let mut messages = Vec::new();
    if let Some(system) = system_prompt {
        messages.push(MessageTemplate::system(system)?);
    }
    messages.push(MessageTemplate::user(base_prompt)?);

    ChatPromptTemplate::from_messages(messages).format_messages(&input.values(format_instructions))
}
