//! In-memory checkpointer. Not persistent across process restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::memory::checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata};
use crate::memory::checkpointer::{CheckpointError, Checkpointer};
use crate::memory::config::RunnableConfig;

/// Key for the inner map: thread_id and namespace joined by "\0", so distinct
/// namespaces of one thread never collide.
fn thread_key(config: &RunnableConfig) -> Result<String, CheckpointError> {
    let thread_id = config
        .thread_id
        .as_deref()
        .ok_or(CheckpointError::ThreadIdRequired)?;
    Ok(format!("{}\0{}", thread_id, config.checkpoint_ns))
}

/// In-memory checkpointer: per-thread append-only checkpoint lineage.
///
/// Holds `Checkpoint<S>` values directly; no serialization involved. Safe
/// under concurrent access by distinct threads (single RwLock over the map).
///
/// **Interaction**: Used as `Arc<dyn Checkpointer<S>>` via
/// `StateGraph::compile_with_checkpointer`.
pub struct MemorySaver<S> {
    inner: RwLock<HashMap<String, Vec<Checkpoint<S>>>>,
}

impl<S> MemorySaver<S> {
    /// Creates an empty saver.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<S> Default for MemorySaver<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> Checkpointer<S> for MemorySaver<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn put(
        &self,
        config: &RunnableConfig,
        checkpoint: &Checkpoint<S>,
    ) -> Result<String, CheckpointError> {
        let key = thread_key(config)?;
        let mut guard = self.inner.write().await;
        guard.entry(key).or_default().push(checkpoint.clone());
        Ok(checkpoint.id.clone())
    }

    async fn get_tuple(
        &self,
        config: &RunnableConfig,
    ) -> Result<Option<(Checkpoint<S>, CheckpointMetadata)>, CheckpointError> {
        let key = thread_key(config)?;
        let guard = self.inner.read().await;
        let Some(lineage) = guard.get(&key) else {
            return Ok(None);
        };
        let found = match &config.checkpoint_id {
            Some(id) => lineage.iter().find(|c| &c.id == id),
            None => lineage.last(),
        };
        Ok(found.map(|c| (c.clone(), c.metadata.clone())))
    }

    async fn list(
        &self,
        config: &RunnableConfig,
        limit: Option<usize>,
    ) -> Result<Vec<CheckpointListItem>, CheckpointError> {
        let key = thread_key(config)?;
        let guard = self.inner.read().await;
        let mut items: Vec<CheckpointListItem> = guard
            .get(&key)
            .map(|lineage| {
                lineage
                    .iter()
                    .map(|c| CheckpointListItem {
                        checkpoint_id: c.id.clone(),
                        metadata: c.metadata.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        if let Some(n) = limit {
            items.truncate(n);
        }
        Ok(items)
    }
}
