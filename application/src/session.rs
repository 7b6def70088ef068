//! Per-process chat session state.

use chatline_domain::{ConversationHistory, Model};
use tracing::debug;

/// The state every dispatch call works against: the current model and the
/// live conversation history.
///
/// Created once at start-up and passed by `&mut` to each dispatch. The
/// history is only ever swapped for a whole new value.
#[derive(Debug, Clone)]
pub struct ChatSession {
    model: Model,
    history: ConversationHistory,
}

impl ChatSession {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            history: ConversationHistory::new(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn set_model(&mut self, model: Model) {
        debug!("Model changed: {} -> {}", self.model, model);
        self.model = model;
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Make `history` the live history.
    pub fn replace_history(&mut self, history: ConversationHistory) {
        debug!(
            "Live history replaced: {} -> {} messages (id {:?})",
            self.history.len(),
            history.len(),
            history.id()
        );
        self.history = history;
    }

    /// Start over with an empty history.
    pub fn clear_history(&mut self) {
        self.replace_history(ConversationHistory::new());
    }
}
