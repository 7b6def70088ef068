//! Raw line → [`Action`] classification

use super::action::Action;

/// Prefix that marks the first token of a line as a command
pub const COMMAND_PREFIX: char = '/';

/// Result of classifying one line: the action and the text it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub action: Action,
    pub remaining: String,
}

impl Classified {
    fn new(action: Action, remaining: impl Into<String>) -> Self {
        Self {
            action,
            remaining: remaining.into(),
        }
    }
}

/// Classify one line of raw input.
///
/// The first whitespace-separated token is matched case-insensitively
/// against the reserved command tokens. Lines that do not start with
/// [`COMMAND_PREFIX`] are queries; an empty line continues the current
/// conversation. Load tokens accept the id glued on (`/l12`) or as the
/// next word (`/l 12`).
pub fn classify(raw_line: &str) -> Classified {
    let line = raw_line.trim();
    if line.is_empty() {
        return Classified::new(Action::ContinueConversation, "");
    }

    if !line.starts_with(COMMAND_PREFIX) {
        return Classified::new(Action::AnswerQuery, line);
    }

    let (token, rest) = match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    };
    let lowered = token.to_lowercase();

    let action = match lowered.as_str() {
        "/q" | "/quit" | "/exit" => Action::Exit,
        "/h" | "/help" | "/?" => Action::Help,
        "/change" => Action::ChangeModel,
        "/m" | "/model" => Action::ShowModel,
        "/d" | "/debug" => Action::Debug,
        "/n" | "/new" => Action::NewConversation,
        "/l" | "/load" => Action::LoadConversation,
        "/lm" | "/messages" => Action::LoadMessages,
        "/check" => Action::CheckData,
        "/s" | "/system" => Action::SystemPrompt,
        _ => return classify_glued_load(token, &lowered, rest),
    };

    Classified::new(action, rest)
}

/// `/l<digits>` and `/lm<digits>`: the id is part of the token itself.
fn classify_glued_load(token: &str, lowered: &str, rest: &str) -> Classified {
    let unknown = || Classified::new(Action::Unknown(token.to_string()), rest);

    let (action, digits) = if let Some(digits) = lowered.strip_prefix("/lm") {
        (Action::LoadMessages, digits)
    } else if let Some(digits) = lowered.strip_prefix("/l") {
        (Action::LoadConversation, digits)
    } else {
        return unknown();
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return unknown();
    }

    let remaining = if rest.is_empty() {
        digits.to_string()
    } else {
        format!("{} {}", digits, rest)
    };
    Classified::new(action, remaining)
}
