//! Graph node trait: one step in a StateGraph.

use async_trait::async_trait;

use crate::error::GraphError;
use crate::state::GraphState;

/// One step in a graph: state in, state out.
///
/// Where execution goes next is declared on the graph with `add_edge`, not
/// decided by the node. A branch handler appends its contribution to the state
/// and returns the whole state.
///
/// **Interaction**: Registered via `StateGraph::add_node`; run by
/// `CompiledStateGraph::stream` after the entry router selects it.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: GraphState,
{
    /// Node id (e.g. `"dataset"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, state out. Errors abort the traversal.
    async fn run(&self, state: S) -> Result<S, GraphError>;
}
