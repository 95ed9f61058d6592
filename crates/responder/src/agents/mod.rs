//! Branch handlers: one node per routing label.
//!
//! Each agent implements `Node<AgentState>` and appends exactly one assistant
//! message per run, so the terminal point can uniformly read the last message
//! regardless of which branch ran.

mod api;
mod dataset;
mod general;

pub use api::{ApiAgent, ApiBackend, ApiError, MockBackend, RestBackend};
pub use dataset::{DatasetAgent, DatasetIndex, InMemoryIndex, IndexError, SearchHit};
pub use general::GeneralAgent;
