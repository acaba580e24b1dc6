use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::PromptError;
use crate::llm::{ChatMessage, Role};

// A lone brace that is neither an escape nor part of `{name}` is an error.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|[{}]").expect("token pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Values for template placeholders.
///
/// `None` marks an optional value that was declared but not provided; it
/// renders as an empty string. A name with no entry at all is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptValues {
    values: BTreeMap<String, Option<String>>,
}

impl PromptValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), Some(value.into()));
        self
    }

    pub fn with_optional(mut self, name: &str, value: Option<String>) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.values.get(name).map(|value| value.as_deref())
    }
}

/// A single template with `{name}` placeholders. `{{` and `}}` are literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn from_template(template: &str) -> Result<Self, PromptError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN.captures_iter(template) {
            let Some(token) = caps.get(0) else { continue };
            literal.push_str(&template[last..token.start()]);
            last = token.end();

            match (token.as_str(), caps.get(1)) {
                ("{{", _) => literal.push('{'),
                ("}}", _) => literal.push('}'),
                (_, Some(name)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.as_str().to_string()));
                }
                (stray, None) => {
                    return Err(PromptError::UnbalancedBrace {
                        brace: stray.chars().next().unwrap_or('{'),
                        position: token.start(),
                    });
                }
            }
        }

        literal.push_str(&template[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Placeholder names in order of first appearance.
    pub fn input_variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Render with `values`. Values the template never references are ignored.
    pub fn format(&self, values: &PromptValues) -> Result<String, PromptError> {
        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => rendered.push_str(value.unwrap_or_default()),
                    None => {
                        return Err(PromptError::MissingPlaceholder { name: name.clone() });
                    }
                },
            }
        }

        Ok(rendered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub role: Role,
    pub template: PromptTemplate,
}

impl MessageTemplate {
    pub fn system(template: &str) -> Result<Self, PromptError> {
        Ok(Self {
            role: Role::System,
            template: PromptTemplate::from_template(template)?,
        })
    }

    pub fn user(template: &str) -> Result<Self, PromptError> {
        Ok(Self {
            role: Role::User,
            template: PromptTemplate::from_template(template)?,
        })
    }
}

/// Ordered message templates rendered together with one set of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPromptTemplate {
    messages: Vec<MessageTemplate>,
}

impl ChatPromptTemplate {
    pub fn from_messages(messages: Vec<MessageTemplate>) -> Self {
        Self { messages }
    }

    pub fn input_variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for message in &self.messages {
            for name in message.template.input_variables() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn format_messages(&self, values: &PromptValues) -> Result<Vec<ChatMessage>, PromptError> {
        self.messages
            .iter()
            .map(|message| {
                Ok(ChatMessage {
                    role: message.role,
                    content: message.template.format(values)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_substituted() {
        let template = PromptTemplate::from_template("Read {text}.\n{format_instructions}").unwrap();
        let values = PromptValues::new()
            .with("text", "John Doe purchased the Elgin Vase from Jane Doe.")
            .with("format_instructions", "Reply with {\"triplets\": []}");

        let rendered = template.format(&values).unwrap();
        assert_eq!(
            rendered,
            "Read John Doe purchased the Elgin Vase from Jane Doe..\nReply with {\"triplets\": []}"
        );
    }

    #[test]
    fn test_missing_placeholder_fails() {
        let template = PromptTemplate::from_template("{content} then {steps}").unwrap();
        let values = PromptValues::new().with("content", "a");

        assert_eq!(
            template.format(&values),
            Err(PromptError::MissingPlaceholder {
                name: "steps".to_string()
            })
        );
    }

    #[test]
    fn test_absent_optional_renders_empty() {
        let template = PromptTemplate::from_template("[{steps}]").unwrap();
        let values = PromptValues::new().with_optional("steps", None);
        assert_eq!(template.format(&values).unwrap(), "[]");
    }

    #[test]
    fn test_unused_values_ignored() {
        let template = PromptTemplate::from_template("No placeholders here.").unwrap();
        let values = PromptValues::new().with("text", "ignored");
        assert_eq!(template.format(&values).unwrap(), "No placeholders here.");
        assert!(template.input_variables().is_empty());
    }

    #[test]
    fn test_escaped_braces() {
        let template = PromptTemplate::from_template("{{\"name\": \"{name}\"}}").unwrap();
        let values = PromptValues::new().with("name", "Jane Doe");
        assert_eq!(template.format(&values).unwrap(), "{\"name\": \"Jane Doe\"}");
    }

    #[test]
    fn test_stray_brace_rejected() {
        assert_eq!(
            PromptTemplate::from_template("a { b"),
            Err(PromptError::UnbalancedBrace {
                brace: '{',
                position: 2
            })
        );
        assert!(matches!(
            PromptTemplate::from_template("closing } only"),
            Err(PromptError::UnbalancedBrace { brace: '}', .. })
        ));
    }

    #[test]
    fn test_input_variables_deduplicated() {
        let template = PromptTemplate::from_template("{text} {format_instructions} {text}").unwrap();
        assert_eq!(template.input_variables(), vec!["text", "format_instructions"]);
    }

    #[test]
    fn test_chat_template_renders_every_message() {
        let chat = ChatPromptTemplate::from_messages(vec![
            MessageTemplate::system("You study {domain}.").unwrap(),
            MessageTemplate::user("{text}").unwrap(),
        ]);
        let values = PromptValues::new()
            .with("domain", "the antiquities trade")
            .with("text", "Jane Doe sells the Elgin Vase.");

        let messages = chat.format_messages(&values).unwrap();
        assert_eq!(
            messages,
            vec![
                ChatMessage::system("You study the antiquities trade."),
                ChatMessage::user("Jane Doe sells the Elgin Vase."),
            ]
        );
        assert_eq!(chat.input_variables(), vec!["domain", "text"]);
    }
}
