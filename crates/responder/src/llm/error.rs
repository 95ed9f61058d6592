//! LLM call errors.

use thiserror::Error;

/// Error while calling an LLM backend.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// API returned an error (4xx/5xx or a business error).
    #[error("api error: {0}")]
    ApiError(String),

    /// Rate limited (e.g. 429).
    #[error("rate limit: {0}")]
    RateLimit(String),

    /// Authentication failed (e.g. 401/403, missing key).
    #[error("auth failed: {0}")]
    Auth(String),

    /// Request rejected as invalid (other 4xx).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Response could not be parsed.
    #[error("parsing failed: {0}")]
    Parsing(String),
}
