//! Conversation storage port

use chatline_domain::{ConversationHistory, ConversationId};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur while reading or writing stored conversations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Conversation {0} not found")]
    NotFound(ConversationId),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversation {id} is corrupt: {reason}")]
    Corrupt { id: ConversationId, reason: String },
}

/// Durable storage for conversations
///
/// `save` writes a whole conversation snapshot, so saving the same
/// history twice leaves the store unchanged.
pub trait ConversationRepository: Send + Sync {
    /// Store `history`. A history without an id gets a new one; a history
    /// with an id overwrites that conversation. Returns the id used.
    fn save(&self, history: &ConversationHistory) -> Result<ConversationId, StorageError>;

    /// Load a stored conversation; the result carries `id`.
    fn load(&self, id: ConversationId) -> Result<ConversationHistory, StorageError>;

    /// Ids of every stored conversation.
    fn list_ids(&self) -> Result<BTreeSet<ConversationId>, StorageError>;
}
