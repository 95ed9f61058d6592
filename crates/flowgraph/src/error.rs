//! Runtime errors for graph execution.
//!
//! Compile-time problems are `graph::CompilationError`; checkpoint storage
//! problems are `memory::CheckpointError` and convert via `From`.

use thiserror::Error;

use crate::memory::CheckpointError;

/// Error while executing a compiled graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The entry router failed to produce a label.
    #[error("routing failed: {0}")]
    Route(String),

    /// The router produced a label with no registered branch. Hard error:
    /// there is no default branch to fall back to.
    #[error("no branch registered for label {0}")]
    UnknownLabel(String),

    /// A node failed while processing state.
    #[error("node {id}: {reason}")]
    Node { id: String, reason: String },

    /// Loading or saving a checkpoint failed.
    #[error("checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),
}

impl GraphError {
    /// Builds a `Node` error from a node id and any displayable cause.
    pub fn node(id: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        GraphError::Node {
            id: id.into(),
            reason: reason.to_string(),
        }
    }
}
