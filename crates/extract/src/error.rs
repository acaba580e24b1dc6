use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("missing value for placeholder `{name}`")]
    MissingPlaceholder { name: String },

    #[error("unbalanced `{brace}` at byte {position} of template")]
    UnbalancedBrace { brace: char, position: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse extraction config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid prompt template in config: {0}")]
    Template(#[from] PromptError),
}
