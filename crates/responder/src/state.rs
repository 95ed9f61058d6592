//! Graph state for the responder: an append-only message history.

use flowgraph::GraphState;

use crate::message::Message;

/// Conversation state threaded through the graph.
///
/// One field: the ordered message history. Appending preserves all prior
/// messages; nothing in this crate reorders or prunes the sequence. Branch
/// handlers append exactly one assistant message per traversal, so the merge
/// point can uniformly read the last message.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    pub messages: Vec<Message>,
}

impl AgentState {
    /// Seeds a fresh state with a single user message.
    pub fn from_question(question: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(question)],
        }
    }

    /// Text of the last message, whatever its role.
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(Message::content)
    }

    /// Text of the most recent user message (the current question).
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::User(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl GraphState for AgentState {
    /// Accumulator semantics: the update's messages are appended onto the
    /// persisted history.
    fn merge(prior: Self, update: Self) -> Self {
        let mut messages = prior.messages;
        messages.extend(update.messages);
        Self { messages }
    }
}
