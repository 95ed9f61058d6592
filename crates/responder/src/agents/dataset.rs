//! Dataset branch: top-k lookup over an indexed document set, answer grounded
//! in the retrieved context.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use flowgraph::{GraphError, Node};

use crate::llm::{ChatRequest, LlmClient};
use crate::message::Message;
use crate::state::AgentState;

/// Error for dataset index operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Reading the document file failed.
    #[error("io: {0}")]
    Io(String),
    /// The document file was not valid JSON of the expected shape.
    #[error("parse: {0}")]
    Parse(String),
    /// Backend lookup error. Message is opaque to avoid leaking backend types.
    #[error("storage: {0}")]
    Storage(String),
}

/// Hit returned by `DatasetIndex::search`.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
    pub score: f64,
}

/// Scored lookup over a document set.
///
/// **Interaction**: Held as `Arc<dyn DatasetIndex>` by `DatasetAgent`;
/// `InMemoryIndex` is the bundled implementation.
#[async_trait]
pub trait DatasetIndex: Send + Sync {
    /// Returns up to `top_k` documents relevant to the query, best first.
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>, IndexError>;
}

/// One indexed document.
#[derive(Debug, Clone, Deserialize)]
struct Document {
    id: String,
    text: String,
}

fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// In-memory document index with token-overlap scoring. Not persistent.
///
/// Score = number of distinct query tokens present in the document; ties
/// break on document id, so ranking is deterministic for a fixed document
/// set.
pub struct InMemoryIndex {
    docs: RwLock<Vec<Document>>,
}

impl InMemoryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }

    /// Loads documents from a JSON file: `[{"id": "...", "text": "..."}]`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| IndexError::Io(e.to_string()))?;
        let docs: Vec<Document> =
            serde_json::from_str(&raw).map_err(|e| IndexError::Parse(e.to_string()))?;
        Ok(Self {
            docs: RwLock::new(docs),
        })
    }

    /// Adds one document.
    pub async fn add_document(&self, id: impl Into<String>, text: impl Into<String>) {
        self.docs.write().await.push(Document {
            id: id.into(),
            text: text.into(),
        });
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetIndex for InMemoryIndex {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let mut query_tokens = tokens(query);
        query_tokens.sort();
        query_tokens.dedup();

        let guard = self.docs.read().await;
        let mut hits: Vec<SearchHit> = guard
            .iter()
            .filter_map(|doc| {
                let doc_tokens = tokens(&doc.text);
                let overlap = query_tokens
                    .iter()
                    .filter(|t| doc_tokens.contains(t))
                    .count();
                (overlap > 0).then(|| SearchHit {
                    id: doc.id.clone(),
                    text: doc.text.clone(),
                    score: overlap as f64,
                })
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(top_k);
        Ok(hits)
    }
}

const DATASET_PROMPT: &str =
    "Answer the question using only the provided context. If the context does \
     not contain the answer, say so.";

/// Dataset branch handler: retrieve, then answer from the retrieved context.
///
/// **Interaction**: Implements `Node<AgentState>`; selected by the entry
/// router for `Route::Dataset`. Consumes a `DatasetIndex` and an `LlmClient`;
/// appends one assistant message.
pub struct DatasetAgent {
    index: Arc<dyn DatasetIndex>,
    llm: Arc<dyn LlmClient>,
    top_k: usize,
}

impl DatasetAgent {
    /// Builds the agent with the given index, client, and result count.
    pub fn new(index: Arc<dyn DatasetIndex>, llm: Arc<dyn LlmClient>, top_k: usize) -> Self {
        Self { index, llm, top_k }
    }
}

#[async_trait]
impl Node<AgentState> for DatasetAgent {
    fn id(&self) -> &str {
        "dataset"
    }

    async fn run(&self, state: AgentState) -> Result<AgentState, GraphError> {
        let question = state
            .last_user_content()
            .ok_or_else(|| GraphError::node("dataset", "no user message in state"))?;

        let hits = self
            .index
            .search(question, self.top_k)
            .await
            .map_err(|e| GraphError::node("dataset", e))?;
        tracing::debug!(hits = hits.len(), "dataset context retrieved");

        let context = if hits.is_empty() {
            "(no matching documents)".to_string()
        } else {
            hits.iter()
                .map(|h| format!("- [{}] {}", h.id, h.text))
                .collect::<Vec<_>>()
                .join("\n")
        };
        let req = ChatRequest::with_system(
            DATASET_PROMPT,
            format!("Context:\n{context}\n\nQuestion: {question}"),
        );
        let response = self
            .llm
            .chat(req)
            .await
            .map_err(|e| GraphError::node("dataset", e))?;

        let mut messages = state.messages;
        messages.push(Message::assistant(response.content));
        Ok(AgentState { messages })
    }
}
