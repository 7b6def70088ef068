//! Application layer for chatline
//!
//! This crate contains use cases, port definitions, the session context and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    conversation_repository::{ConversationRepository, StorageError},
    llm_gateway::{GatewayError, LlmGateway, ModelReply},
    view::ChatView,
};
pub use session::ChatSession;
pub use use_cases::answer_queries::{AnswerError, AnswerQueriesUseCase, BatchOutcome, BatchState};
pub use use_cases::check_data::CheckDataUseCase;
pub use use_cases::command_handler::{ChatError, CommandHandler, Flow};
pub use use_cases::extract_queries::ExtractQueriesUseCase;
pub use use_cases::load_conversation::{LoadConversationUseCase, LoadError};
pub use use_cases::query_guard::QueryCountGuard;
