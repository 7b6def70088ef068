//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid conversation id: {0:?}")]
    InvalidConversationId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid model choice: {0}")]
    InvalidModelChoice(String),

    #[error("No models configured")]
    NoModels,

    #[error("Placeholder $0{0} was left unresolved")]
    UnresolvedPlaceholder(String),

    #[error("Placeholder $0{0} needs at least two variants")]
    InvalidVariantList(String),
}

impl DomainError {
    /// Errors caused by what the user typed; reported and otherwise ignored.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidConversationId(_)
                | DomainError::UnknownCommand(_)
                | DomainError::InvalidModelChoice(_)
        )
    }
}
