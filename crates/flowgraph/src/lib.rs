//! Minimal state-graph engine: state-in, state-out.
//!
//! A graph is a set of named nodes, a conditional entry (a router picks the
//! branch by label), and declared edges ending at `Target::End`. Compile once,
//! then `invoke` or `stream` repeatedly; when compiled with a checkpointer,
//! state persists per thread id and is merged back into the next input for the
//! same thread. Concrete states, routers, and nodes live in application
//! crates, not in the engine.

pub mod error;
pub mod graph;
pub mod memory;
pub mod state;

pub use error::GraphError;
pub use graph::{CompilationError, CompiledStateGraph, Node, Router, StateGraph, Target};
pub use memory::{
    Checkpoint, CheckpointError, CheckpointListItem, CheckpointMetadata, CheckpointSource,
    Checkpointer, MemorySaver, RunnableConfig,
};
pub use state::GraphState;
