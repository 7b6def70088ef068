//! Conversation history

use super::entities::{Message, Role, Turn};
use super::id::ConversationId;
use serde::{Deserialize, Serialize};

/// The ordered messages a model sees as context (Entity)
///
/// Carries the id it is stored under once it has been saved. The live
/// history of a session is only ever swapped for a new value; the
/// mutating methods are for building working copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ConversationId>,
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(id: Option<ConversationId>, messages: Vec<Message>) -> Self {
        Self { id, messages }
    }

    pub fn id(&self) -> Option<ConversationId> {
        self.id
    }

    pub fn set_id(&mut self, id: ConversationId) {
        self.id = Some(id);
    }

    /// Same messages, not tied to any stored conversation.
    ///
    /// Saving a detached copy creates a new conversation instead of
    /// overwriting the one it was taken from.
    pub fn detached(&self) -> Self {
        Self {
            id: None,
            messages: self.messages.clone(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append the user and assistant messages of `turn`.
    pub fn push_turn(&mut self, turn: &Turn) {
        self.messages.extend(turn.messages());
    }

    /// Content of the leading system message, if any
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    /// A copy whose leading system message is `prompt`.
    pub fn with_system_prompt(&self, prompt: impl Into<String>) -> Self {
        let mut messages = self.messages.clone();
        let system = Message::system(prompt);
        if messages.first().is_some_and(|m| m.role == Role::System) {
            messages[0] = system;
        } else {
            messages.insert(0, system);
        }
        Self {
            id: self.id,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;

    fn sample() -> ConversationHistory {
        let mut h = ConversationHistory::new();
        h.push(Message::system("Sé breve"));
        h.push_turn(&Turn::new("¿Quién fue Curie?", "Una física", Model::MistralSmall));
        h.push_turn(&Turn::new("¿Y Newton?", "Un físico", Model::MistralTiny));
        h
    }

    #[test]
    fn push_turn_appends_user_then_assistant() {
        let h = sample();
        assert_eq!(h.len(), 5);
        assert_eq!(h.messages()[3], Message::user("¿Y Newton?"));
        assert_eq!(h.messages()[4].role, Role::Assistant);
        assert_eq!(h.messages()[4].model, Some(Model::MistralTiny));
    }

    #[test]
    fn system_prompt_is_replaced_not_duplicated() {
        let h = sample().with_system_prompt("Responde en inglés");
        assert_eq!(h.system_prompt(), Some("Responde en inglés"));
        assert_eq!(h.len(), sample().len());
    }

    #[test]
    fn system_prompt_is_inserted_first() {
        let mut h = ConversationHistory::new();
        h.push(Message::user("hola"));
        let h = h.with_system_prompt("Sé amable");
        assert_eq!(h.messages()[0], Message::system("Sé amable"));
        assert_eq!(h.len(), 2);
        assert_eq!(ConversationHistory::new().system_prompt(), None);
    }

    #[test]
    fn detached_drops_only_the_id() {
        let mut h = sample();
        h.set_id(ConversationId::new(5));
        let d = h.detached();
        assert_eq!(d.id(), None);
        assert_eq!(d.messages(), h.messages());
        assert_eq!(h.id(), Some(ConversationId::new(5)));
    }

    #[test]
    fn serde_round_trip_keeps_id_and_models() {
        let mut h = sample();
        h.set_id(ConversationId::new(3));
        let json = serde_json::to_string(&h).unwrap();
        let back: ConversationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }
}
