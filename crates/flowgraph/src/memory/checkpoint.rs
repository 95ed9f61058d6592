//! Checkpoint and metadata types.

use std::time::SystemTime;

/// Metadata for a single checkpoint (source, step, created_at).
#[derive(Debug, Clone)]
pub struct CheckpointMetadata {
    pub source: CheckpointSource,
    pub step: u64,
    pub created_at: Option<SystemTime>,
}

/// What produced the checkpoint.
#[derive(Debug, Clone)]
pub enum CheckpointSource {
    /// Saved by graph execution after a traversal.
    Loop,
    /// Saved by an explicit state update outside a traversal.
    Update,
}

/// One checkpoint: a state snapshot plus id/ts and metadata.
///
/// Stored by a `Checkpointer` keyed by (thread_id, checkpoint_ns);
/// `channel_values` is the graph state `S`.
///
/// **Interaction**: Produced by `CompiledStateGraph::stream` after a
/// traversal; consumed by `Checkpointer::put`, returned by `get_tuple`.
#[derive(Debug, Clone)]
pub struct Checkpoint<S> {
    pub id: String,
    pub ts: String,
    pub channel_values: S,
    pub metadata: CheckpointMetadata,
}

/// Item returned by `Checkpointer::list` for per-thread history.
#[derive(Debug, Clone)]
pub struct CheckpointListItem {
    pub checkpoint_id: String,
    pub metadata: CheckpointMetadata,
}

impl<S> Checkpoint<S> {
    /// Builds a checkpoint from the current state. Uses current time for
    /// id/ts; the id also embeds the step so ids within a thread stay unique.
    pub fn from_state(state: S, source: CheckpointSource, step: u64) -> Self {
        let now = SystemTime::now();
        let ts = format!(
            "{}",
            now.duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        let id = format!("{ts}-{step}");
        Self {
            id,
            ts,
            channel_values: state,
            metadata: CheckpointMetadata {
                source,
                step,
                created_at: Some(now),
            },
        }
    }
}
