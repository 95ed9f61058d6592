//! Chat request/response and usage types.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Role of a single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Builds a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Builds an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(m: &Message) -> Self {
        match m {
            Message::System(s) => ChatMessage::system(s.clone()),
            Message::User(s) => ChatMessage::user(s.clone()),
            Message::Assistant(s) => ChatMessage::assistant(s.clone()),
        }
    }
}

/// A chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered message list.
    pub messages: Vec<ChatMessage>,
    /// Optional temperature; client default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Optional max generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Single-turn request from user content, no system prompt.
    pub fn single_turn(user_content: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(user_content)],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Single-turn request from a system prompt plus user content.
    pub fn with_system(
        system_prompt: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_content),
            ],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Request from the accumulated conversation history.
    pub fn from_history(history: &[Message]) -> Self {
        Self {
            messages: history.iter().map(ChatMessage::from).collect(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Token usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// A chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text.
    pub content: String,
    /// Token usage, zeroed when the backend reports none.
    #[serde(default)]
    pub usage: Usage,
}
