//! Responder facade: builds the three-branch graph once, answers per session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use flowgraph::{
    CompilationError, CompiledStateGraph, MemorySaver, Node, Router, RunnableConfig, StateGraph,
    Target,
};

use crate::agents::{ApiAgent, DatasetAgent, GeneralAgent, IndexError, InMemoryIndex, RestBackend};
use crate::decider::{Decider, Route};
use crate::llm::{ChatOpenAi, LlmClient};
use crate::settings::Settings;
use crate::state::AgentState;

/// Returned when a traversal produced nothing usable. An explicit fallback,
/// not a failure signal: callers always get a string.
pub const NO_RESPONSE: &str = "No response";

/// Conversational router facade.
///
/// Wires the decider and the three branch agents into a fixed fan-out/fan-in
/// topology, compiled once with an in-memory checkpointer that keys state by
/// session id. If the graph fails to compile the facade stays usable but
/// non-functional: every `run` logs the condition and yields the sentinel.
///
/// **Interaction**: Built once (typically via `from_settings` at process
/// start) and shared; `run` is the single entry point for callers.
pub struct Responder {
    graph: Option<CompiledStateGraph<AgentState, Route>>,
    /// One lock per session key: same-key calls are serialized so concurrent
    /// writers cannot interleave one session's history; distinct keys run in
    /// parallel.
    session_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Responder {
    /// Builds the facade from explicit collaborators.
    pub fn new(
        decider: Box<dyn Router<AgentState, Route>>,
        dataset: Box<dyn Node<AgentState>>,
        api: Box<dyn Node<AgentState>>,
        general: Box<dyn Node<AgentState>>,
    ) -> Self {
        info!("initializing responder");
        let graph = match Self::build_graph(decider, dataset, api, general) {
            Ok(graph) => {
                info!("state graph compiled");
                Some(graph)
            }
            Err(e) => {
                error!("failed to build state graph: {e}");
                None
            }
        };
        Self {
            graph,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Builds the facade with production collaborators from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, IndexError> {
        let llm: Arc<dyn LlmClient> = Arc::new(ChatOpenAi::new(settings.openai.clone()));
        let index = match &settings.dataset_path {
            Some(path) => Arc::new(InMemoryIndex::from_json_file(path)?),
            None => Arc::new(InMemoryIndex::new()),
        };
        Ok(Self::new(
            Box::new(Decider::new(llm.clone())),
            Box::new(DatasetAgent::new(index, llm.clone(), settings.top_k)),
            Box::new(ApiAgent::new(Arc::new(RestBackend::new(
                settings.api_endpoint.clone(),
            )))),
            Box::new(
                GeneralAgent::new(llm)
                    .with_system_prompt("You are a friendly, concise assistant."),
            ),
        ))
    }

    /// One entry routed three ways, every branch ending the traversal.
    fn build_graph(
        decider: Box<dyn Router<AgentState, Route>>,
        dataset: Box<dyn Node<AgentState>>,
        api: Box<dyn Node<AgentState>>,
        general: Box<dyn Node<AgentState>>,
    ) -> Result<CompiledStateGraph<AgentState, Route>, CompilationError> {
        let dataset_id = dataset.id().to_string();
        let api_id = api.id().to_string();
        let general_id = general.id().to_string();

        let mut graph = StateGraph::new();
        graph
            .add_node(dataset_id.clone(), dataset)
            .add_node(api_id.clone(), api)
            .add_node(general_id.clone(), general)
            .set_conditional_entry(
                decider,
                HashMap::from([
                    (Route::Dataset, dataset_id.clone()),
                    (Route::Api, api_id.clone()),
                    (Route::General, general_id.clone()),
                ]),
            )
            .add_edge(dataset_id, Target::End)
            .add_edge(api_id, Target::End)
            .add_edge(general_id, Target::End);
        graph.compile_with_checkpointer(Arc::new(MemorySaver::new()))
    }

    /// Answers one question within the given session.
    ///
    /// The session id is an opaque key: repeated calls with the same id see
    /// the accumulated history, distinct ids are isolated. Every failure mode
    /// is caught here, logged, and degraded to [`NO_RESPONSE`]; this method
    /// never returns an error to the caller.
    pub async fn run(&self, session_id: &str, question: &str) -> String {
        info!(session_id, "received question: {question}");

        let Some(graph) = &self.graph else {
            error!("state graph unavailable; returning fallback");
            return NO_RESPONSE.to_string();
        };

        let session_lock = {
            let mut locks = self.session_locks.lock().await;
            locks
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = session_lock.lock().await;

        let state = AgentState::from_question(question);
        let config = RunnableConfig::for_thread(session_id);

        match graph.stream(state, Some(config)).await {
            Ok(values) => {
                debug!(events = values.len(), "graph traversal complete");
                match values.last().and_then(AgentState::last_content) {
                    Some(answer) => {
                        info!(session_id, "answer: {answer}");
                        answer.to_string()
                    }
                    None => {
                        warn!(session_id, "no response produced");
                        NO_RESPONSE.to_string()
                    }
                }
            }
            Err(e) => {
                error!(session_id, "graph execution failed: {e}");
                NO_RESPONSE.to_string()
            }
        }
    }
}
