//! State contract for graph execution.

/// State threaded through a graph: cloneable, sendable, mergeable.
///
/// `merge` combines a persisted snapshot with the incoming input when a run
/// resumes an existing thread (accumulator semantics: the update is applied on
/// top of the prior state, never replacing it). Runs without a checkpointer
/// never call `merge`.
///
/// **Interaction**: Required by `StateGraph`, `Node`, and `Router`; invoked by
/// `CompiledStateGraph::stream` after `Checkpointer::get_tuple`.
pub trait GraphState: Clone + Send + Sync + 'static {
    /// Merges a persisted prior state with the new input for the same thread.
    fn merge(prior: Self, update: Self) -> Self;
}
