//! State graph builder: nodes, conditional entry, declared edges.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledStateGraph, Entry};
use crate::graph::node::Node;
use crate::graph::router::Router;
use crate::graph::target::Target;
use crate::memory::Checkpointer;
use crate::state::GraphState;

/// State graph builder: fan-out at the entry, declared edges after that.
///
/// Generic over the state type `S` and the branch label type `L`. Register
/// branch nodes with `add_node`, attach the entry router and its label →
/// node-id mapping with `set_conditional_entry`, declare each node's outgoing
/// edge with `add_edge`, then `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Box<dyn Node<S>>` and `Box<dyn Router<S, L>>`;
/// produces `CompiledStateGraph<S, L>`.
pub struct StateGraph<S, L> {
    nodes: HashMap<String, Box<dyn Node<S>>>,
    entry: Option<Entry<S, L>>,
    edges: HashMap<String, Target>,
}

impl<S, L> Default for StateGraph<S, L>
where
    S: GraphState,
    L: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, L> StateGraph<S, L>
where
    S: GraphState,
    L: fmt::Debug + Clone + Eq + Hash + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            entry: None,
            edges: HashMap::new(),
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. The node is stored as
    /// `Box<dyn Node<S>>`; use `add_edge` to declare where it leads.
    pub fn add_node(&mut self, id: impl Into<String>, node: Box<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Sets the conditional entry: a router and the label → node-id mapping.
    ///
    /// The router is evaluated once per traversal, against the state after any
    /// checkpoint merge. Every target id must be registered via `add_node`
    /// before `compile()`. A label missing from the mapping is a hard runtime
    /// error (`GraphError::UnknownLabel`), not a fallback.
    pub fn set_conditional_entry(
        &mut self,
        router: Box<dyn Router<S, L>>,
        targets: HashMap<L, String>,
    ) -> &mut Self {
        self.entry = Some(Entry { router, targets });
        self
    }

    /// Declares the outgoing edge of a node.
    ///
    /// Every registered node needs exactly one outgoing edge; use
    /// `Target::End` for branches that finish the traversal. Re-declaring
    /// replaces the previous edge.
    pub fn add_edge(&mut self, from: impl Into<String>, to: Target) -> &mut Self {
        self.edges.insert(from.into(), to);
        self
    }

    /// Builds the executable graph without persistence.
    pub fn compile(self) -> Result<CompiledStateGraph<S, L>, CompilationError> {
        self.compile_with_checkpointer_opt(None)
    }

    /// Builds the executable graph with a checkpointer for persistence.
    ///
    /// When `stream`/`invoke` is called with a `RunnableConfig` carrying a
    /// `thread_id`, the latest checkpoint for that thread is merged into the
    /// input before routing and the final state is saved after the run.
    pub fn compile_with_checkpointer(
        self,
        checkpointer: Arc<dyn Checkpointer<S>>,
    ) -> Result<CompiledStateGraph<S, L>, CompilationError> {
        self.compile_with_checkpointer_opt(Some(checkpointer))
    }

    /// Validates the topology: an entry exists, every referenced id is a
    /// registered node, and every node has an outgoing edge.
    fn compile_with_checkpointer_opt(
        self,
        checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    ) -> Result<CompiledStateGraph<S, L>, CompilationError> {
        let entry = self.entry.ok_or(CompilationError::EntryMissing)?;

        for id in entry.targets.values() {
            if !self.nodes.contains_key(id) {
                return Err(CompilationError::NodeNotFound(id.clone()));
            }
        }
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if let Target::Node(id) = to {
                if !self.nodes.contains_key(id) {
                    return Err(CompilationError::NodeNotFound(id.clone()));
                }
            }
        }
        for id in self.nodes.keys() {
            if !self.edges.contains_key(id) {
                return Err(CompilationError::DeadEnd(id.clone()));
            }
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            entry,
            edges: self.edges,
            checkpointer,
        })
    }
}
