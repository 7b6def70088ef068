//! Conversation domain.
//!
//! - [`entities::Message`]: one chat message, tagged with the model that wrote it
//! - [`entities::Turn`]: one query/response exchange
//! - [`history::ConversationHistory`]: the ordered messages a model sees as context
//! - [`id::ConversationId`]: identifier of a stored conversation

pub mod entities;
pub mod history;
pub mod id;
