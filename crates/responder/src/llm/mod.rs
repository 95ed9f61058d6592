//! LLM clients and request/response types.
//!
//! - `LlmClient`: async chat interface
//! - `ChatRequest` / `ChatResponse` / `Usage`: request, response, usage
//! - `ChatOpenAi`: OpenAI-compatible client; `MockLlm`: test double
//! - `LlmError`: call error enum

mod client;
mod error;
mod mock;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use mock::MockLlm;
pub use openai::{ChatOpenAi, OpenAiConfig};
pub use types::{ChatMessage, ChatRequest, ChatResponse, MessageRole, Usage};
