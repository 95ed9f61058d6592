//! Integration tests for StateGraph: compile validation, routing, streaming,
//! and checkpointed threads.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use flowgraph::{
    CompilationError, GraphError, GraphState, MemorySaver, Node, Router, RunnableConfig,
    StateGraph, Target,
};

#[derive(Debug, Clone, Default)]
struct TraceState {
    log: Vec<String>,
}

impl TraceState {
    fn seeded(entry: &str) -> Self {
        Self {
            log: vec![entry.to_string()],
        }
    }
}

impl GraphState for TraceState {
    fn merge(prior: Self, update: Self) -> Self {
        let mut log = prior.log;
        log.extend(update.log);
        Self { log }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    Left,
    Right,
}

/// Node that appends its own id to the trace log.
struct TagNode(&'static str);

#[async_trait]
impl Node<TraceState> for TagNode {
    fn id(&self) -> &str {
        self.0
    }
    async fn run(&self, state: TraceState) -> Result<TraceState, GraphError> {
        let mut log = state.log;
        log.push(self.0.to_string());
        Ok(TraceState { log })
    }
}

struct FailNode;

#[async_trait]
impl Node<TraceState> for FailNode {
    fn id(&self) -> &str {
        "fail"
    }
    async fn run(&self, _state: TraceState) -> Result<TraceState, GraphError> {
        Err(GraphError::node("fail", "handler exploded"))
    }
}

struct FixedRouter(Side);

#[async_trait]
impl Router<TraceState, Side> for FixedRouter {
    async fn decide(&self, _state: &TraceState) -> Result<Side, GraphError> {
        Ok(self.0)
    }
}

struct FailingRouter;

#[async_trait]
impl Router<TraceState, Side> for FailingRouter {
    async fn decide(&self, _state: &TraceState) -> Result<Side, GraphError> {
        Err(GraphError::Route("decider offline".into()))
    }
}

fn full_targets() -> HashMap<Side, String> {
    HashMap::from([
        (Side::Left, "left".to_string()),
        (Side::Right, "right".to_string()),
    ])
}

/// Two branches, both ending the traversal, entry routed by `router`.
fn two_branch_graph(router: Box<dyn Router<TraceState, Side>>) -> StateGraph<TraceState, Side> {
    let mut graph = StateGraph::new();
    graph
        .add_node("left", Box::new(TagNode("left")))
        .add_node("right", Box::new(TagNode("right")))
        .set_conditional_entry(router, full_targets())
        .add_edge("left", Target::End)
        .add_edge("right", Target::End);
    graph
}

#[tokio::test]
async fn compile_fails_without_entry() {
    let mut graph = StateGraph::<TraceState, Side>::new();
    graph
        .add_node("left", Box::new(TagNode("left")))
        .add_edge("left", Target::End);

    assert!(matches!(
        graph.compile(),
        Err(CompilationError::EntryMissing)
    ));
}

#[tokio::test]
async fn compile_fails_when_entry_target_unknown() {
    let mut graph = StateGraph::new();
    graph
        .add_node("left", Box::new(TagNode("left")))
        .set_conditional_entry(
            Box::new(FixedRouter(Side::Left)),
            HashMap::from([(Side::Left, "missing".to_string())]),
        )
        .add_edge("left", Target::End);

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        _ => panic!("expected NodeNotFound"),
    }
}

#[tokio::test]
async fn compile_fails_when_node_lacks_outgoing_edge() {
    let mut graph = StateGraph::new();
    graph
        .add_node("left", Box::new(TagNode("left")))
        .set_conditional_entry(
            Box::new(FixedRouter(Side::Left)),
            HashMap::from([(Side::Left, "left".to_string())]),
        );

    match graph.compile() {
        Err(CompilationError::DeadEnd(id)) => assert_eq!(id, "left"),
        _ => panic!("expected DeadEnd"),
    }
}

#[tokio::test]
async fn each_label_routes_to_exactly_its_branch() {
    for (side, expected) in [(Side::Left, "left"), (Side::Right, "right")] {
        let compiled = two_branch_graph(Box::new(FixedRouter(side)))
            .compile()
            .unwrap();
        let state = compiled.invoke(TraceState::default(), None).await.unwrap();
        assert_eq!(state.log, vec![expected.to_string()]);
    }
}

#[tokio::test]
async fn unknown_label_is_a_hard_error() {
    let mut graph = StateGraph::new();
    graph
        .add_node("left", Box::new(TagNode("left")))
        .set_conditional_entry(
            Box::new(FixedRouter(Side::Right)),
            HashMap::from([(Side::Left, "left".to_string())]),
        )
        .add_edge("left", Target::End);
    let compiled = graph.compile().unwrap();

    let err = compiled
        .invoke(TraceState::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::UnknownLabel(_)));
}

#[tokio::test]
async fn stream_emits_initial_state_then_state_after_each_node() {
    let compiled = two_branch_graph(Box::new(FixedRouter(Side::Left)))
        .compile()
        .unwrap();

    let values = compiled
        .stream(TraceState::seeded("question"), None)
        .await
        .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].log, vec!["question".to_string()]);
    assert_eq!(
        values[1].log,
        vec!["question".to_string(), "left".to_string()]
    );
}

#[tokio::test]
async fn router_failure_propagates() {
    let compiled = two_branch_graph(Box::new(FailingRouter)).compile().unwrap();
    let err = compiled
        .invoke(TraceState::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, GraphError::Route(_)));
}

#[tokio::test]
async fn node_failure_propagates() {
    let mut graph = StateGraph::new();
    graph
        .add_node("fail", Box::new(FailNode))
        .set_conditional_entry(
            Box::new(FixedRouter(Side::Left)),
            HashMap::from([(Side::Left, "fail".to_string())]),
        )
        .add_edge("fail", Target::End);
    let compiled = graph.compile().unwrap();

    let err = compiled
        .invoke(TraceState::default(), None)
        .await
        .unwrap_err();
    match err {
        GraphError::Node { id, .. } => assert_eq!(id, "fail"),
        other => panic!("expected Node error, got {other}"),
    }
}

#[tokio::test]
async fn same_thread_accumulates_state_across_invocations() {
    let compiled = two_branch_graph(Box::new(FixedRouter(Side::Left)))
        .compile_with_checkpointer(Arc::new(MemorySaver::new()))
        .unwrap();
    let config = RunnableConfig::for_thread("t1");

    let first = compiled
        .invoke(TraceState::seeded("a"), Some(config.clone()))
        .await
        .unwrap();
    assert_eq!(first.log, vec!["a".to_string(), "left".to_string()]);

    let second = compiled
        .invoke(TraceState::seeded("b"), Some(config))
        .await
        .unwrap();
    assert_eq!(
        second.log,
        vec![
            "a".to_string(),
            "left".to_string(),
            "b".to_string(),
            "left".to_string()
        ]
    );
}

#[tokio::test]
async fn distinct_threads_are_isolated() {
    let compiled = two_branch_graph(Box::new(FixedRouter(Side::Left)))
        .compile_with_checkpointer(Arc::new(MemorySaver::new()))
        .unwrap();

    compiled
        .invoke(TraceState::seeded("a"), Some(RunnableConfig::for_thread("t1")))
        .await
        .unwrap();
    let other = compiled
        .invoke(TraceState::seeded("c"), Some(RunnableConfig::for_thread("t2")))
        .await
        .unwrap();
    assert_eq!(other.log, vec!["c".to_string(), "left".to_string()]);
}

#[tokio::test]
async fn runs_without_thread_id_stay_stateless() {
    let compiled = two_branch_graph(Box::new(FixedRouter(Side::Left)))
        .compile_with_checkpointer(Arc::new(MemorySaver::new()))
        .unwrap();

    compiled
        .invoke(TraceState::seeded("a"), None)
        .await
        .unwrap();
    let second = compiled
        .invoke(TraceState::seeded("b"), None)
        .await
        .unwrap();
    assert_eq!(second.log, vec!["b".to_string(), "left".to_string()]);
}
