//! State graph: nodes + conditional entry + declared edges, compile and run.
//!
//! Build with `add_node` / `set_conditional_entry` / `add_edge`, then
//! `compile` or `compile_with_checkpointer` to get a `CompiledStateGraph`.

mod compile_error;
mod compiled;
mod node;
mod router;
mod state_graph;
mod target;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use node::Node;
pub use router::Router;
pub use state_graph::StateGraph;
pub use target::Target;
