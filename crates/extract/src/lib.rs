pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod template;

pub use config::ExtractionConfig;
pub use error::{ConfigError, PromptError};
pub use llm::{ChatMessage, ChatModel, Role};
pub use prompt::{TaskInput, TemplateVariant, create_prompt};
pub use template::{ChatPromptTemplate, MessageTemplate, PromptTemplate, PromptValues};

use anyhow::{Context, Result};
use schema::{Extraction, OutputSchema};
use tracing::{debug, warn};

/// Renders a prompt, calls the model once, and validates the reply.
pub struct Extractor<M: ChatModel> {
    model: M,
    config: ExtractionConfig,
}

impl<M: ChatModel> Extractor<M> {
    pub fn new(model: M, config: ExtractionConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Messages for the configured schema variant.
    pub fn build_messages(&self, input: &TaskInput) -> Result<Vec<ChatMessage>, PromptError> {
        prompt::render_messages(
            self.config.base_prompt(),
            self.config.system_prompt.as_deref(),
            self.config.schema.format_instructions(),
            input,
        )
    }

    /// Extract using the schema variant chosen in the config.
    pub fn extract(&self, input: &TaskInput) -> Result<Extraction> {
        let variant = self.config.schema;
        let messages = self
            .build_messages(input)
            .context("Failed to build extraction prompt")?;
        debug!(schema = %variant, messages = messages.len(), "Built extraction prompt");

        let raw = self
            .model
            .complete(&messages)
            .context("Model call failed")?;

        let extraction = variant
            .parse(&raw)
            .inspect_err(|e| {
                warn!(
                    schema = %variant,
                    violations = e.violations().len(),
                    error = %e,
                    "Model response failed validation"
                );
            })
            .with_context(|| format!("Response does not match the {variant} schema"))?;

        debug!(schema = %variant, records = extraction.record_count(), "Parsed extraction");
        Ok(extraction)
    }

    /// Extract into a schema type fixed at compile time, ignoring the
    /// configured variant.
    pub fn extract_as<S: OutputSchema>(&self, input: &TaskInput) -> Result<S> {
        let messages = prompt::render_messages(
            self.config.base_prompt(),
            self.config.system_prompt.as_deref(),
            S::format_instructions(),
            input,
        )
        .context("Failed to build extraction prompt")?;
        debug!(schema = S::NAME, messages = messages.len(), "Built extraction prompt");

        let raw = self
            .model
            .complete(&messages)
            .context("Model call failed")?;

        S::parse(&raw)
            .inspect_err(|e| {
                warn!(
                    schema = S::NAME,
                    violations = e.violations().len(),
                    error = %e,
                    "Model response failed validation"
                );
            })
            .with_context(|| format!("Response does not match the {} schema", S::NAME))
    }
}
