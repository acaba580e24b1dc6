use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => f.write_str("system"),
            Role::User => f.write_str("user"),
        }
    }
}

/// One rendered chat message, ready to hand to a model client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat model supplied by the caller. Returns the raw text of the reply.
///
/// Transport, retries and rate limiting are the implementor's business.
pub trait ChatModel {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

impl<F> ChatModel for F
where
    F: Fn(&[ChatMessage]) -> Result<String>,
{
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_value(ChatMessage::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
        assert_eq!(Role::System.to_string(), "system");
    }

    #[test]
    fn test_closure_is_a_chat_model() {
        let echo = |messages: &[ChatMessage]| -> Result<String> {
            Ok(messages.iter().map(|m| m.content.as_str()).collect::<Vec<_>>().join("|"))
        };
        let reply = echo
            .complete(&[ChatMessage::system("a"), ChatMessage::user("b")])
            .unwrap();
        assert_eq!(reply, "a|b");
    }
}
