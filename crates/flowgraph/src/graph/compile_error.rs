//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the declared topology is not
//! executable. Used only by the graph module.

use thiserror::Error;

/// Error when compiling a state graph.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// No conditional entry was set; the graph has no way in.
    #[error("no conditional entry set")]
    EntryMissing,

    /// An entry mapping or edge references a node id that was never
    /// registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A registered node has no outgoing edge; a traversal reaching it could
    /// not terminate.
    #[error("node has no outgoing edge: {0}")]
    DeadEnd(String),
}
