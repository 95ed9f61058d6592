//! Checkpointer trait and CheckpointError.

use async_trait::async_trait;

use crate::memory::checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata};
use crate::memory::config::RunnableConfig;

/// Error type for checkpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    /// The config carried no `thread_id`; there is nothing to key the
    /// checkpoint by.
    #[error("thread_id required")]
    ThreadIdRequired,
    /// Backend storage error. Message is opaque to avoid leaking backend
    /// types.
    #[error("storage: {0}")]
    Storage(String),
}

/// Saves and loads checkpoints keyed by (thread_id, checkpoint_ns).
///
/// The lineage per thread is append-only: `put` adds, `get_tuple` returns the
/// latest (or the one named by `config.checkpoint_id`), `list` returns the
/// history oldest-first. Implementations must be safe under concurrent access
/// by distinct threads; ordering under concurrent writers to one thread is
/// the caller's responsibility.
///
/// **Interaction**: Injected via `StateGraph::compile_with_checkpointer`;
/// used by `CompiledStateGraph::stream` when `config.thread_id` is set.
#[async_trait]
pub trait Checkpointer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Persists a checkpoint for the configured thread. Returns the
    /// checkpoint id used.
    async fn put(
        &self,
        config: &RunnableConfig,
        checkpoint: &Checkpoint<S>,
    ) -> Result<String, CheckpointError>;

    /// Loads the latest checkpoint for the thread, or the one given by
    /// `config.checkpoint_id`. `Ok(None)` when the thread has no history.
    async fn get_tuple(
        &self,
        config: &RunnableConfig,
    ) -> Result<Option<(Checkpoint<S>, CheckpointMetadata)>, CheckpointError>;

    /// Lists the thread's checkpoints oldest-first, up to `limit`.
    async fn list(
        &self,
        config: &RunnableConfig,
        limit: Option<usize>,
    ) -> Result<Vec<CheckpointListItem>, CheckpointError>;
}
