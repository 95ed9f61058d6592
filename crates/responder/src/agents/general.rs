//! General branch: open-ended chat over the accumulated history.

use std::sync::Arc;

use async_trait::async_trait;

use flowgraph::{GraphError, Node};

use crate::llm::{ChatMessage, ChatRequest, LlmClient};
use crate::message::Message;
use crate::state::AgentState;

/// General branch handler: the whole history goes to the LLM, the reply is
/// appended as one assistant message.
///
/// **Interaction**: Implements `Node<AgentState>`; selected by the entry
/// router for `Route::General`.
pub struct GeneralAgent {
    llm: Arc<dyn LlmClient>,
    system_prompt: Option<String>,
}

impl GeneralAgent {
    /// Builds the agent with the given LLM client, no system prompt.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            system_prompt: None,
        }
    }

    /// Sets the system prompt prepended to every request.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

#[async_trait]
impl Node<AgentState> for GeneralAgent {
    fn id(&self) -> &str {
        "general"
    }

    async fn run(&self, state: AgentState) -> Result<AgentState, GraphError> {
        let mut req = ChatRequest::from_history(&state.messages);
        if let Some(sys) = &self.system_prompt {
            req.messages.insert(0, ChatMessage::system(sys.clone()));
        }

        let response = self
            .llm
            .chat(req)
            .await
            .map_err(|e| GraphError::node("general", e))?;

        let mut messages = state.messages;
        messages.push(Message::assistant(response.content));
        Ok(AgentState { messages })
    }
}
