//! Answer queries use case.
//!
//! Sends a batch of concrete queries to the model one after another,
//! persisting every answered turn as soon as it arrives.
//!
//! # Which result becomes the live history
//!
//! Every query in a batch is answered against the history the session had
//! when the batch started. A batch of several queries comes from a `/for`
//! fan-out: each variant is an independent exchange against the same
//! context, not a continuing dialogue. Only the result of the **first**
//! query becomes the live history, so the user can keep talking from it;
//! the others are stored as separate conversations and the session never
//! sees them.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::conversation_repository::{ConversationRepository, StorageError};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::view::ChatView;
use crate::session::ChatSession;
use chatline_domain::{ConcreteQuery, ConversationId, Message, Turn, truncate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a batch
#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Cannot answer an empty batch")]
    EmptyBatch,
}

/// Where a batch is, for query `i` (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Sending(usize),
    Persisted(usize),
    Done,
}

impl BatchState {
    /// Next state of a batch of `total` queries.
    pub fn next(self, total: usize) -> BatchState {
        match self {
            BatchState::Idle if total == 0 => BatchState::Done,
            BatchState::Idle => BatchState::Sending(1),
            BatchState::Sending(i) => BatchState::Persisted(i),
            BatchState::Persisted(i) if i < total => BatchState::Sending(i + 1),
            BatchState::Persisted(_) | BatchState::Done => BatchState::Done,
        }
    }
}

/// Summary of a completed batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Conversations written, one per query, in query order
    pub saved: Vec<ConversationId>,
}

impl BatchOutcome {
    pub fn answered(&self) -> usize {
        self.saved.len()
    }
}

pub struct AnswerQueriesUseCase {
    gateway: Arc<dyn LlmGateway>,
    repository: Arc<dyn ConversationRepository>,
    view: Arc<dyn ChatView>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerQueriesUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        repository: Arc<dyn ConversationRepository>,
        view: Arc<dyn ChatView>,
    ) -> Self {
        Self {
            gateway,
            repository,
            view,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Answer `queries` in order against the session's current history.
    ///
    /// The first error stops the batch: later queries are never sent,
    /// turns already saved stay saved, and the live history is the first
    /// query's result if that one got through, otherwise unchanged.
    pub async fn execute(
        &self,
        queries: &[ConcreteQuery],
        debug: bool,
        session: &mut ChatSession,
    ) -> Result<BatchOutcome, AnswerError> {
        if queries.is_empty() {
            return Err(AnswerError::EmptyBatch);
        }

        let total = queries.len();
        let base = session.history().clone();
        let model = session.model().clone();
        let mut saved = Vec::with_capacity(total);
        let mut state = BatchState::Idle;

        info!("Answering {} queries with {}", total, model);

        for (index, query) in queries.iter().enumerate() {
            let current = index + 1;
            state = state.next(total);
            debug!("Batch state: {:?}", state);

            self.view.show_progress(current, total);

            // Query 1 continues the stored conversation; the rest fork from it.
            let mut working = if current == 1 {
                base.clone()
            } else {
                base.detached()
            };
            let mut request = working.messages().to_vec();
            request.push(Message::user(query.as_str()));

            self.conversation_logger.log(ConversationEvent::new(
                "query_sent",
                serde_json::json!({
                    "model": model.as_str(),
                    "index": current,
                    "total": total,
                    "query": query.as_str(),
                    "context_messages": base.len(),
                }),
            ));

            let reply = match self.gateway.send(&model, &request, debug).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("Query {}/{} failed, batch aborted: {}", current, total, e);
                    return Err(e.into());
                }
            };

            let turn = Turn::new(query.as_str(), reply.content.clone(), reply.model.clone());
            working.push_turn(&turn);

            let id = self.repository.save(&working)?;
            working.set_id(id);
            saved.push(id);
            state = state.next(total);
            debug!("Batch state: {:?} (conversation {})", state, id);

            self.conversation_logger.log(ConversationEvent::new(
                "llm_response",
                serde_json::json!({
                    "model": turn.model.as_str(),
                    "index": current,
                    "conversation_id": id.value(),
                    "bytes": turn.response.len(),
                    "text": turn.response,
                }),
            ));

            self.view
                .show_exchange(&turn.model, &turn.query, &turn.response);
            if let Some(raw) = &reply.raw {
                self.view.show_debug(raw);
            }

            if current == 1 {
                session.replace_history(working);
            }

            debug!(
                "Query {}/{} answered: {}",
                current,
                total,
                truncate(&turn.response, 80)
            );
        }

        state = state.next(total);
        debug!("Batch state: {:?}", state);

        self.conversation_logger.log(ConversationEvent::new(
            "batch_complete",
            serde_json::json!({
                "total": total,
                "conversation_ids": saved.iter().map(|id| id.value()).collect::<Vec<_>>(),
            }),
        ));

        Ok(BatchOutcome { saved })
    }
}
