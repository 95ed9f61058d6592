//! Api branch: forward the question to an external REST service.

use std::sync::Arc;

use async_trait::async_trait;

use flowgraph::{GraphError, Node};

use crate::message::Message;
use crate::state::AgentState;

/// Error while calling the external API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status.
    #[error("status {0}")]
    Status(u16),
    /// Configured failure (mock only).
    #[error("backend: {0}")]
    Backend(String),
}

/// External answering service: question in, answer text out.
///
/// **Interaction**: Held as `Arc<dyn ApiBackend>` by `ApiAgent`;
/// `RestBackend` is the HTTP implementation, `MockBackend` the test double.
#[async_trait]
pub trait ApiBackend: Send + Sync {
    async fn call(&self, question: &str) -> Result<String, ApiError>;
}

/// Pulls the `answer` field out of a JSON body, falling back to the raw body
/// for services that return plain text.
fn extract_answer(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("answer").and_then(|a| a.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// REST implementation: GET `endpoint?q=<question>`.
pub struct RestBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl RestBackend {
    /// Builds a backend for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ApiBackend for RestBackend {
    async fn call(&self, question: &str) -> Result<String, ApiError> {
        let res = self
            .client
            .get(&self.endpoint)
            .query(&[("q", question)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(extract_answer(&body))
    }
}

/// Mock backend: fixed answer or configured failure.
pub struct MockBackend {
    reply: Result<String, String>,
}

impl MockBackend {
    /// Always answers with the given text.
    pub fn fixed(answer: impl Into<String>) -> Self {
        Self {
            reply: Ok(answer.into()),
        }
    }

    /// Always fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
        }
    }
}

#[async_trait]
impl ApiBackend for MockBackend {
    async fn call(&self, _question: &str) -> Result<String, ApiError> {
        self.reply.clone().map_err(ApiError::Backend)
    }
}

/// Api branch handler: one backend call, one appended assistant message.
///
/// **Interaction**: Implements `Node<AgentState>`; selected by the entry
/// router for `Route::Api`.
pub struct ApiAgent {
    backend: Arc<dyn ApiBackend>,
}

impl ApiAgent {
    /// Builds the agent over the given backend.
    pub fn new(backend: Arc<dyn ApiBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Node<AgentState> for ApiAgent {
    fn id(&self) -> &str {
        "api"
    }

    async fn run(&self, state: AgentState) -> Result<AgentState, GraphError> {
        let question = state
            .last_user_content()
            .ok_or_else(|| GraphError::node("api", "no user message in state"))?;

        let answer = self
            .backend
            .call(question)
            .await
            .map_err(|e| GraphError::node("api", e))?;
        tracing::debug!("api backend answered");

        let mut messages = state.messages;
        messages.push(Message::assistant(answer));
        Ok(AgentState { messages })
    }
}
