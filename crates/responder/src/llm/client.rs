//! Async chat client trait.

use async_trait::async_trait;

use super::error::LlmError;
use super::types::{ChatRequest, ChatResponse};

/// Async conversational LLM client.
///
/// **Interaction**: Implemented by `ChatOpenAi` and `MockLlm`; held as
/// `Arc<dyn LlmClient>` by the decider and the dataset/general agents.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One chat completion: messages in, assistant reply out.
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, LlmError>;
}
