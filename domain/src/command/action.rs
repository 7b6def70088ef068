//! Action value object

/// What a line of user input asks the client to do (Value Object)
///
/// Created once per line by [`classify`](super::classifier::classify) and
/// consumed once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Help,
    ChangeModel,
    /// Answer the remaining text with the debug flag on
    Debug,
    /// Load a stored conversation and show its full transcript
    LoadConversation,
    /// Load a stored conversation and show its messages compactly
    LoadMessages,
    /// Start from an empty history, then answer the remaining text
    NewConversation,
    /// Empty line: keep the current history untouched
    ContinueConversation,
    CheckData,
    ShowModel,
    SystemPrompt,
    /// Plain text: answer it against the live history
    AnswerQuery,
    /// A `/` token that matches no command
    Unknown(String),
}

impl Action {
    /// Actions whose argument text is a conversation id
    pub fn is_load(&self) -> bool {
        matches!(self, Action::LoadConversation | Action::LoadMessages)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Exit => "exit",
            Action::Help => "help",
            Action::ChangeModel => "change_model",
            Action::Debug => "debug",
            Action::LoadConversation => "load_conversation",
            Action::LoadMessages => "load_messages",
            Action::NewConversation => "new_conversation",
            Action::ContinueConversation => "continue_conversation",
            Action::CheckData => "check_data",
            Action::ShowModel => "show_model",
            Action::SystemPrompt => "system_prompt",
            Action::AnswerQuery => "answer_query",
            Action::Unknown(_) => "unknown",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Unknown(token) => write!(f, "unknown({})", token),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_actions() {
        assert!(Action::LoadConversation.is_load());
        assert!(Action::LoadMessages.is_load());
        assert!(!Action::AnswerQuery.is_load());
    }

    #[test]
    fn display() {
        assert_eq!(Action::LoadMessages.to_string(), "load_messages");
        assert_eq!(Action::Unknown("/zz".to_string()).to_string(), "unknown(/zz)");
    }
}
