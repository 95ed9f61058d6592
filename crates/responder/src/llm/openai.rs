//! OpenAI-compatible LLM client (Chat Completions API).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::LlmClient;
use super::error::LlmError;
use super::types::{ChatRequest, ChatResponse, MessageRole, Usage};

/// OpenAI-compatible configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key, usually from the `OPENAI_API_KEY` environment variable.
    pub api_key: String,
    /// Base URL, default `https://api.openai.com/v1`; works with compatible
    /// endpoints (Azure, proxies).
    pub base_url: String,
    /// Model id, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Default temperature, used when the request does not set one.
    pub default_temperature: Option<f32>,
}

impl OpenAiConfig {
    /// Reads config from the environment: `OPENAI_API_KEY` required,
    /// `OPENAI_BASE_URL` and `OPENAI_MODEL` optional.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Auth("OPENAI_API_KEY not set".to_string()))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            default_temperature: Some(0.7),
        })
    }
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

fn role_name(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireReply,
}

#[derive(Debug, Deserialize)]
struct WireReply {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

/// OpenAI-compatible chat client over reqwest.
#[derive(Debug)]
pub struct ChatOpenAi {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl ChatOpenAi {
    /// Builds a client with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Builds a client from the environment (requires `OPENAI_API_KEY`).
    pub fn from_env() -> Result<Self, LlmError> {
        OpenAiConfig::from_env().map(Self::new)
    }

    fn build_body(&self, req: &ChatRequest) -> WireRequest {
        let messages = req
            .messages
            .iter()
            .map(|m| WireMessage {
                role: role_name(&m.role).to_string(),
                content: m.content.clone(),
            })
            .collect();
        WireRequest {
            model: self.config.model.clone(),
            messages,
            temperature: req.temperature.or(self.config.default_temperature),
            max_tokens: req.max_tokens,
        }
    }
}

#[async_trait]
impl LlmClient for ChatOpenAi {
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = self.build_body(&req);
        tracing::debug!(model = %body.model, messages = body.messages.len(), "chat completion request");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(text),
                429 => LlmError::RateLimit(text),
                400..=499 => LlmError::InvalidRequest(text),
                _ => LlmError::ApiError(text),
            });
        }

        let parsed: WireResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Parsing(format!("{e}: {text}")))?;
        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        let usage = parsed
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            })
            .unwrap_or_default();
        Ok(ChatResponse { content, usage })
    }
}
