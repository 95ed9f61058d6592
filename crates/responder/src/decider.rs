//! Routing decision: classify the current question into one of the three
//! branch labels.

use std::sync::Arc;

use async_trait::async_trait;

use flowgraph::{GraphError, Router};

use crate::llm::{ChatRequest, LlmClient};
use crate::state::AgentState;

/// Branch label: the closed set of destinations a question can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Answerable from the indexed document set.
    Dataset,
    /// Needs live data from the external API.
    Api,
    /// Everything else: open-ended generation.
    General,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dataset, Route::Api, Route::General];

    /// Canonical label name, as the classifier is asked to reply.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Dataset => "Dataset",
            Route::Api => "Api",
            Route::General => "General",
        }
    }

    /// Parses a classifier reply into a label.
    ///
    /// Exact (trimmed, case-insensitive) match first; otherwise the label
    /// occurring earliest in the text wins, so replies like "General." or
    /// "Label: Api" still resolve. `None` for anything else.
    pub fn parse(text: &str) -> Option<Route> {
        let trimmed = text.trim();
        for route in Route::ALL {
            if trimmed.eq_ignore_ascii_case(route.as_str()) {
                return Some(route);
            }
        }
        let lowered = trimmed.to_lowercase();
        Route::ALL
            .iter()
            .filter_map(|route| {
                lowered
                    .find(&route.as_str().to_lowercase())
                    .map(|pos| (pos, *route))
            })
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, route)| route)
    }
}

const DECIDER_PROMPT: &str = "You are a router for a question-answering system. \
Classify the user's question and reply with exactly one word:\n\
Dataset - the question can be answered from the indexed document collection.\n\
Api - the question needs live external data (exchange rates, prices, weather).\n\
General - anything else.\n\
Reply with Dataset, Api, or General and nothing more.";

/// LLM-backed routing decision.
///
/// Classification runs at temperature 0 against the last user message only,
/// so for a fixed state the label is a deterministic function of that state.
/// An unparseable reply is a routing error, never a guessed default.
///
/// **Interaction**: Implements `Router<AgentState, Route>`; evaluated once
/// per traversal at the graph entry.
pub struct Decider {
    llm: Arc<dyn LlmClient>,
}

impl Decider {
    /// Builds the decider with the given LLM client.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Router<AgentState, Route> for Decider {
    async fn decide(&self, state: &AgentState) -> Result<Route, GraphError> {
        let question = state
            .last_user_content()
            .ok_or_else(|| GraphError::Route("no user message to route".into()))?;

        let req = ChatRequest::with_system(DECIDER_PROMPT, question).with_temperature(0.0);
        let response = self
            .llm
            .chat(req)
            .await
            .map_err(|e| GraphError::Route(e.to_string()))?;

        let route = Route::parse(&response.content).ok_or_else(|| {
            GraphError::Route(format!("unrecognized label: {:?}", response.content))
        })?;
        tracing::debug!(label = route.as_str(), "question classified");
        Ok(route)
    }
}
