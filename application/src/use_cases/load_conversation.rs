//! Load conversation use case.
//!
//! Replaces the live history with a stored conversation and shows it.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::conversation_repository::{ConversationRepository, StorageError};
use crate::ports::view::ChatView;
use crate::session::ChatSession;
use chatline_domain::{Action, ConversationId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Action {0} does not load a conversation")]
    NotALoadAction(Action),
}

pub struct LoadConversationUseCase {
    repository: Arc<dyn ConversationRepository>,
    view: Arc<dyn ChatView>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl LoadConversationUseCase {
    pub fn new(repository: Arc<dyn ConversationRepository>, view: Arc<dyn ChatView>) -> Self {
        Self {
            repository,
            view,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Load conversation `id` into `session`.
    ///
    /// [`Action::LoadConversation`] shows the full transcript,
    /// [`Action::LoadMessages`] the compact message list. On error the
    /// session is left as it was.
    pub fn execute(
        &self,
        action: &Action,
        id: ConversationId,
        session: &mut ChatSession,
    ) -> Result<(), LoadError> {
        if !action.is_load() {
            return Err(LoadError::NotALoadAction(action.clone()));
        }

        let history = self.repository.load(id)?;
        info!("Loaded conversation {} ({} messages)", id, history.len());

        match action {
            Action::LoadConversation => self.view.show_conversation(id, &history),
            _ => self.view.show_messages(id, &history),
        }

        self.conversation_logger.log(ConversationEvent::new(
            "conversation_loaded",
            serde_json::json!({
                "conversation_id": id.value(),
                "messages": history.len(),
            }),
        ));

        session.replace_history(history);
        self.view.show_notice("Conversation loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryRepository, ScriptedView, ViewEvent};
    use chatline_domain::{Message, Model};

    fn setup() -> (Arc<InMemoryRepository>, Arc<ScriptedView>, LoadConversationUseCase) {
        let repository = Arc::new(InMemoryRepository::new());
        repository.insert(
            ConversationId::new(4),
            vec![
                Message::user("¿Quién fue Curie?"),
                Message::assistant("Una física", Model::MistralSmall),
            ],
        );
        let view = Arc::new(ScriptedView::new());
        let use_case = LoadConversationUseCase::new(repository.clone(), view.clone());
        (repository, view, use_case)
    }

    #[test]
    fn load_conversation_replaces_history_and_shows_transcript() {
        let (_, view, use_case) = setup();
        let mut session = ChatSession::new(Model::default());

        use_case
            .execute(&Action::LoadConversation, ConversationId::new(4), &mut session)
            .unwrap();

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().id(), Some(ConversationId::new(4)));
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Conversation(ConversationId::new(4)),
                ViewEvent::Notice("Conversation loaded".to_string()),
            ]
        );
    }

    #[test]
    fn load_messages_shows_compact_list() {
        let (_, view, use_case) = setup();
        let mut session = ChatSession::new(Model::default());

        use_case
            .execute(&Action::LoadMessages, ConversationId::new(4), &mut session)
            .unwrap();

        assert_eq!(view.events()[0], ViewEvent::Messages(ConversationId::new(4)));
    }

    #[test]
    fn unknown_id_leaves_session_untouched() {
        let (_, view, use_case) = setup();
        let mut session = ChatSession::new(Model::default());
        session.replace_history({
            let mut h = chatline_domain::ConversationHistory::new();
            h.push(Message::user("previo"));
            h
        });

        let result = use_case.execute(&Action::LoadConversation, ConversationId::new(99), &mut session);

        assert!(matches!(
            result,
            Err(LoadError::Storage(StorageError::NotFound(id))) if id == ConversationId::new(99)
        ));
        assert_eq!(session.history().messages()[0].content, "previo");
        assert!(view.events().is_empty());
    }

    #[test]
    fn non_load_action_is_a_defect() {
        let (_, _, use_case) = setup();
        let mut session = ChatSession::new(Model::default());
        let result = use_case.execute(&Action::Help, ConversationId::new(4), &mut session);
        assert!(matches!(result, Err(LoadError::NotALoadAction(Action::Help))));
    }
}
