use schema::SchemaVariant;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::prompt::TemplateVariant;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub schema: SchemaVariant,
    pub template: TemplateVariant,
    /// Replaces the built-in template text when set.
    pub base_prompt: Option<String>,
    pub system_prompt: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            schema: SchemaVariant::StrictTriplets,
            template: TemplateVariant::Text,
            base_prompt: None,
            system_prompt: None,
        }
    }
}

impl ExtractionConfig {
    /// Closed relation vocabulary over plain text.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Open relations with entities and patterns, over whole documents.
    pub fn exploratory() -> Self {
        Self {
            schema: SchemaVariant::Decomposition,
            template: TemplateVariant::Content,
            base_prompt: None,
            system_prompt: None,
        }
    }

    /// Parse from TOML. Template overrides must have balanced braces.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        PromptTemplate::from_template(config.base_prompt())?;
        if let Some(system) = &config.system_prompt {
            PromptTemplate::from_template(system)?;
        }
        Ok(config)
    }

    pub fn base_prompt(&self) -> &str {
        self.base_prompt
            .as_deref()
            .unwrap_or_else(|| self.template.base_prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::prompt::CONTENT_PROMPT;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ExtractionConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExtractionConfig::default());
        assert_eq!(config, ExtractionConfig::strict());
    }

    #[test]
    fn test_toml_selects_variants() {
        let config = ExtractionConfig::from_toml_str(
            r#"
schema = "decomposition"
template = "content"
system_prompt = "You are a provenance researcher."
"#,
        )
        .unwrap();

        assert_eq!(config.schema, SchemaVariant::Decomposition);
        assert_eq!(config.base_prompt(), CONTENT_PROMPT);
        assert_eq!(config.system_prompt.as_deref(), Some("You are a provenance researcher."));
    }

    #[test]
    fn test_base_prompt_override() {
        let config =
            ExtractionConfig::from_toml_str("base_prompt = \"Find dealers in {text}\"").unwrap();
        assert_eq!(config.base_prompt(), "Find dealers in {text}");
    }

    #[test]
    fn test_unbalanced_override_rejected() {
        let err = ExtractionConfig::from_toml_str("base_prompt = \"Find dealers in {text\"")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Template(PromptError::UnbalancedBrace { brace: '{', .. })
        ));
    }

    #[test]
    fn test_unknown_schema_rejected() {
        assert!(matches!(
            ExtractionConfig::from_toml_str("schema = \"graph\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_exploratory_preset() {
        let config = ExtractionConfig::exploratory();
        assert_eq!(config.schema, SchemaVariant::Decomposition);
        assert_eq!(config.template, TemplateVariant::Content);
    }
}
