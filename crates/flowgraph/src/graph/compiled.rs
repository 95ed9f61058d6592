//! Compiled state graph: immutable, supports invoke and stream only.
//!
//! Built by `StateGraph::compile`. The same compiled topology is reused across
//! invocations; per-thread state lives only in the checkpointer, keyed by
//! `RunnableConfig::thread_id`, so traversals for different threads never
//! share state.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::GraphError;
use crate::memory::{Checkpoint, CheckpointSource, Checkpointer, RunnableConfig};
use crate::state::GraphState;

use super::node::Node;
use super::router::Router;
use super::target::Target;

/// Conditional entry of a compiled graph: router plus label → node-id mapping.
pub(super) struct Entry<S, L> {
    pub(super) router: Box<dyn Router<S, L>>,
    pub(super) targets: HashMap<L, String>,
}

/// Compiled graph: immutable structure, ready to run.
///
/// Created by `StateGraph::compile()`. A traversal routes once at the entry,
/// runs the selected node, then follows declared edges until `Target::End`.
///
/// **Interaction**: Built from `StateGraph`; callers use `invoke` for the
/// final state or `stream` for every intermediate state.
pub struct CompiledStateGraph<S, L> {
    pub(super) nodes: HashMap<String, Box<dyn Node<S>>>,
    pub(super) entry: Entry<S, L>,
    pub(super) edges: HashMap<String, Target>,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
}

impl<S, L> CompiledStateGraph<S, L>
where
    S: GraphState,
    L: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static,
{
    /// Runs the graph and collects every intermediate state in order: the
    /// input after checkpoint merge, then the state after each node.
    ///
    /// With a checkpointer and a `thread_id` in the config, the latest
    /// checkpoint for the thread is merged into the input via
    /// `GraphState::merge` before routing, and the final state is persisted
    /// after the traversal. Any routing, node, or checkpoint failure aborts
    /// the whole run with an error; no partial value list is returned.
    pub async fn stream(
        &self,
        input: S,
        config: Option<RunnableConfig>,
    ) -> Result<Vec<S>, GraphError> {
        let config = config.unwrap_or_default();
        let (mut state, step) = self.restore(&config, input).await?;

        let mut values = vec![state.clone()];

        let label = self.entry.router.decide(&state).await?;
        let mut current = self
            .entry
            .targets
            .get(&label)
            .ok_or_else(|| GraphError::UnknownLabel(format!("{label:?}")))?
            .clone();
        tracing::debug!(label = ?label, node = %current, "entry routed");

        loop {
            let node = self
                .nodes
                .get(&current)
                .expect("compiled graph has all nodes");
            state = node.run(state).await?;
            values.push(state.clone());

            let next = self
                .edges
                .get(&current)
                .expect("compiled graph has an edge for every node");
            match next {
                Target::End => break,
                Target::Node(id) => current = id.clone(),
            }
        }

        if let (Some(checkpointer), Some(_)) = (&self.checkpointer, &config.thread_id) {
            let checkpoint = Checkpoint::from_state(state, CheckpointSource::Loop, step);
            let id = checkpointer.put(&config, &checkpoint).await?;
            tracing::debug!(checkpoint = %id, step, "state persisted");
        }

        Ok(values)
    }

    /// Runs the graph and returns only the final state.
    pub async fn invoke(&self, input: S, config: Option<RunnableConfig>) -> Result<S, GraphError> {
        let mut values = self.stream(input, config).await?;
        Ok(values.pop().expect("stream emits at least the initial state"))
    }

    /// Loads the latest checkpoint for the configured thread, if any, and
    /// merges the input on top of it. Returns the state to run and the step
    /// number for the checkpoint written after this traversal.
    async fn restore(&self, config: &RunnableConfig, input: S) -> Result<(S, u64), GraphError> {
        let (Some(checkpointer), Some(_)) = (&self.checkpointer, &config.thread_id) else {
            return Ok((input, 0));
        };
        match checkpointer.get_tuple(config).await? {
            Some((checkpoint, metadata)) => Ok((
                S::merge(checkpoint.channel_values, input),
                metadata.step + 1,
            )),
            None => Ok((input, 0)),
        }
    }
}
