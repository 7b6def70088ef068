//! Command handler: dispatches one classified line.
//!
//! Non-query actions are handled directly; query actions run through
//! extraction, the query-count guard and the batch answerer.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::conversation_repository::{ConversationRepository, StorageError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::view::ChatView;
use crate::session::ChatSession;
use crate::use_cases::answer_queries::{AnswerError, AnswerQueriesUseCase};
use crate::use_cases::check_data::CheckDataUseCase;
use crate::use_cases::extract_queries::ExtractQueriesUseCase;
use crate::use_cases::load_conversation::{LoadConversationUseCase, LoadError};
use crate::use_cases::query_guard::QueryCountGuard;
use chatline_domain::{Action, Classified, ConversationId, DomainError, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by [`CommandHandler::process`]
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChatError {
    /// Mistakes in what the user typed: report and carry on.
    pub fn is_user_input(&self) -> bool {
        matches!(self, ChatError::Domain(e) if e.is_user_input())
    }

    /// Broken invariants: the caller should stop rather than recover.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ChatError::Domain(
                DomainError::UnresolvedPlaceholder(_) | DomainError::InvalidVariantList(_)
            ) | ChatError::Answer(AnswerError::EmptyBatch)
                | ChatError::Load(LoadError::NotALoadAction(_))
        )
    }
}

/// What the input loop should do after a line was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct CommandHandler {
    view: Arc<dyn ChatView>,
    models: Vec<Model>,
    extractor: ExtractQueriesUseCase,
    guard: QueryCountGuard,
    answerer: AnswerQueriesUseCase,
    loader: LoadConversationUseCase,
    checker: CheckDataUseCase,
}

impl CommandHandler {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        repository: Arc<dyn ConversationRepository>,
        view: Arc<dyn ChatView>,
        models: Vec<Model>,
        config: BehaviorConfig,
    ) -> Self {
        Self {
            extractor: ExtractQueriesUseCase::new(view.clone()),
            guard: QueryCountGuard::new(view.clone(), config.query_count_warning),
            answerer: AnswerQueriesUseCase::new(gateway, repository.clone(), view.clone()),
            loader: LoadConversationUseCase::new(repository.clone(), view.clone()),
            checker: CheckDataUseCase::new(repository, view.clone()),
            view,
            models,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.answerer = self.answerer.with_conversation_logger(logger.clone());
        self.loader = self.loader.with_conversation_logger(logger);
        self
    }

    /// Models offered by the change-model prompt
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Let the user pick the model for `session`.
    pub fn prompt_to_select_model(&self, session: &mut ChatSession) -> Result<(), DomainError> {
        if self.models.is_empty() {
            return Err(DomainError::NoModels);
        }
        let model = self.view.choose_model(&self.models);
        info!("Model selected: {}", model);
        session.set_model(model);
        Ok(())
    }

    /// Handle one classified line against `session`.
    pub async fn process(
        &self,
        classified: Classified,
        session: &mut ChatSession,
    ) -> Result<Flow, ChatError> {
        let Classified { action, remaining } = classified;
        debug!("Dispatching {} ({} bytes of text)", action, remaining.len());

        let mut debug = false;
        let mut new_conversation = false;

        match &action {
            Action::Exit => return Ok(Flow::Exit),
            Action::Help => {
                self.view.show_help();
                return Ok(Flow::Continue);
            }
            Action::ChangeModel => {
                self.prompt_to_select_model(session)?;
                return Ok(Flow::Continue);
            }
            Action::ShowModel => {
                self.view.show_model(session.model());
                return Ok(Flow::Continue);
            }
            Action::SystemPrompt => {
                self.set_system_prompt(&remaining, session);
                return Ok(Flow::Continue);
            }
            Action::LoadConversation | Action::LoadMessages => {
                let id = ConversationId::from_digits(&remaining)?;
                self.loader.execute(&action, id, session)?;
                return Ok(Flow::Continue);
            }
            Action::Unknown(token) => {
                return Err(DomainError::UnknownCommand(token.clone()).into());
            }
            Action::Debug => debug = true,
            Action::NewConversation => new_conversation = true,
            // Keeps the live history as is, even when it is empty.
            Action::ContinueConversation => {}
            Action::CheckData => {
                self.checker.execute()?;
            }
            Action::AnswerQuery => {}
        }

        if remaining.trim().is_empty() {
            if new_conversation {
                session.clear_history();
            }
            return Ok(Flow::Continue);
        }

        let Some(queries) = self.extractor.execute(&remaining)? else {
            return Ok(Flow::Continue);
        };

        if self.guard.should_cancel(queries.len()) {
            return Ok(Flow::Continue);
        }

        if new_conversation {
            session.clear_history();
        }

        self.answerer.execute(&queries, debug, session).await?;
        Ok(Flow::Continue)
    }

    /// With text, make it the system prompt of a new live history;
    /// without, show the current one.
    fn set_system_prompt(&self, text: &str, session: &mut ChatSession) {
        let text = text.trim();
        if text.is_empty() {
            self.view.show_system_prompt(session.history().system_prompt());
            return;
        }
        let history = session.history().with_system_prompt(text);
        session.replace_history(history);
        self.view.show_notice("System prompt set");
    }
}
