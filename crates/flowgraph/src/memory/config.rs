//! Run config: thread_id, checkpoint_id, checkpoint_ns.

/// Config for a single run. Identifies the thread and optional checkpoint.
///
/// When the graph is compiled with a checkpointer, a run must provide at
/// least `thread_id` for state to persist; without one the run is stateless.
///
/// **Interaction**: Passed to `CompiledStateGraph::stream` / `invoke` and to
/// `Checkpointer::put` / `get_tuple` / `list`.
#[derive(Debug, Clone, Default)]
pub struct RunnableConfig {
    /// Unique id for this conversation/thread. Opaque to the engine.
    pub thread_id: Option<String>,
    /// If set, load state from this checkpoint instead of the latest.
    pub checkpoint_id: Option<String>,
    /// Optional namespace for checkpoints. Default is empty.
    pub checkpoint_ns: String,
}

impl RunnableConfig {
    /// Builds a config for the given thread id, no explicit checkpoint.
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: Some(thread_id.into()),
            ..Self::default()
        }
    }
}
