//! Entry router trait: picks the branch label for the current state.

use async_trait::async_trait;

use crate::error::GraphError;
use crate::state::GraphState;

/// Decides which branch a traversal enters.
///
/// `L` is a closed label type owned by the application (typically a small
/// enum). The router must be total over reachable states: every state yields
/// exactly one label or a `GraphError::Route`. The mapping from label to node
/// id is declared separately via `StateGraph::set_conditional_entry`.
///
/// **Interaction**: Evaluated once per traversal by
/// `CompiledStateGraph::stream`, against the state after checkpoint merge.
#[async_trait]
pub trait Router<S, L>: Send + Sync
where
    S: GraphState,
{
    /// Produces the label for the current state.
    async fn decide(&self, state: &S) -> Result<L, GraphError>;
}
