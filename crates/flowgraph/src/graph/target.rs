//! Edge target: the next node, or the terminal point.

/// Where an edge leads after a node completes.
///
/// **Interaction**: Declared via `StateGraph::add_edge`; followed by
/// `CompiledStateGraph::stream` after each node run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Run the node with the given id next.
    Node(String),
    /// Terminal point; the traversal ends here.
    End,
}

impl Target {
    /// Builds a `Target::Node` from any string-like id.
    pub fn node(id: impl Into<String>) -> Self {
        Target::Node(id.into())
    }
}
