//! Mock LLM for tests.

use async_trait::async_trait;

use super::client::LlmClient;
use super::error::LlmError;
use super::types::{ChatRequest, ChatResponse, MessageRole, Usage};

enum Reply {
    Fixed(String),
    Echo,
    Fail(String),
}

/// Mock LLM: fixed reply, echo of the last user message, or failure.
///
/// `fixed` drives deterministic routing and answers in tests; `echo` exposes
/// the prompt an agent actually built; `failing` exercises the degraded
/// paths.
///
/// **Interaction**: Implements `LlmClient`; wired into `Decider` and the
/// branch agents by tests.
pub struct MockLlm {
    reply: Reply,
}

impl MockLlm {
    /// Always replies with the given content.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fixed(content.into()),
        }
    }

    /// Replies with the content of the last user message in the request.
    pub fn echo() -> Self {
        Self { reply: Reply::Echo }
    }

    /// Always fails with an api error carrying the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(reason.into()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, LlmError> {
        let content = match &self.reply {
            Reply::Fixed(s) => s.clone(),
            Reply::Echo => req
                .messages
                .iter()
                .rev()
                .find(|m| m.role == MessageRole::User)
                .map(|m| m.content.clone())
                .unwrap_or_default(),
            Reply::Fail(reason) => return Err(LlmError::ApiError(reason.clone())),
        };
        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }
}
