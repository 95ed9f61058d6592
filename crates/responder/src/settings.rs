//! Environment-driven configuration for production wiring.

use std::path::PathBuf;

use crate::llm::{LlmError, OpenAiConfig};

/// Error while reading settings from the environment.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// LLM configuration problem (e.g. missing `OPENAI_API_KEY`).
    #[error("llm config: {0}")]
    Llm(#[from] LlmError),
    /// A numeric variable did not parse.
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for `Responder::from_settings`.
#[derive(Debug, Clone)]
pub struct Settings {
    /// LLM client configuration (decider, dataset, and general branches).
    pub openai: OpenAiConfig,
    /// Endpoint of the external answering service (Api branch).
    pub api_endpoint: String,
    /// Optional JSON document file seeding the dataset index.
    pub dataset_path: Option<PathBuf>,
    /// How many documents the dataset branch retrieves per question.
    pub top_k: usize,
}

impl Settings {
    /// Reads settings from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `RESPONDER_API_ENDPOINT`,
    /// `RESPONDER_DATASET_PATH`, and `RESPONDER_TOP_K` are optional.
    pub fn from_env() -> Result<Self, SettingsError> {
        let openai = OpenAiConfig::from_env()?;
        let api_endpoint = std::env::var("RESPONDER_API_ENDPOINT")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/answer".to_string());
        let dataset_path = std::env::var("RESPONDER_DATASET_PATH")
            .ok()
            .map(PathBuf::from);
        let top_k = match std::env::var("RESPONDER_TOP_K") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
                name: "RESPONDER_TOP_K",
                value: raw,
            })?,
            Err(_) => 3,
        };
        Ok(Self {
            openai,
            api_endpoint,
            dataset_path,
            top_k,
        })
    }
}
