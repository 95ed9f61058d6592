//! Conversational router: one question in, one branch out, one answer back.
//!
//! A `Decider` classifies each question into `Route::{Dataset, Api, General}`;
//! the matching branch agent answers; the `Responder` facade ties it together
//! over a `flowgraph` state graph with per-session checkpointed history.
//! Callers see a single operation: `Responder::run(session_id, question)`,
//! which always returns a string.

pub mod agents;
pub mod decider;
pub mod llm;
pub mod message;
pub mod responder;
pub mod settings;
pub mod state;

pub use agents::{ApiAgent, DatasetAgent, GeneralAgent, InMemoryIndex};
pub use decider::{Decider, Route};
pub use llm::{ChatOpenAi, LlmClient, MockLlm, OpenAiConfig};
pub use message::Message;
pub use responder::{Responder, NO_RESPONSE};
pub use settings::{Settings, SettingsError};
pub use state::AgentState;
