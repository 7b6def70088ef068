//! Console formatting for exchanges and stored conversations

use chatline_domain::{ConversationHistory, ConversationId, Message, Model, Role, single_line, truncate};
use colored::Colorize;

/// Width of one line in the compact message list
const PREVIEW_WIDTH: usize = 80;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn role_label(message: &Message) -> String {
        match (message.role, &message.model) {
            (Role::System, _) => "System".magenta().bold().to_string(),
            (Role::User, _) => "You".green().bold().to_string(),
            (Role::Assistant, Some(model)) => model.as_str().cyan().bold().to_string(),
            (Role::Assistant, None) => "Assistant".cyan().bold().to_string(),
        }
    }

    /// One query and its answer
    pub fn format_exchange(model: &Model, query: &str, response: &str) -> String {
        format!(
            "\n{}\n{} {}\n\n{}\n",
            format!("── {} ──", model).yellow().bold(),
            "Q:".bold(),
            query,
            response
        )
    }

    /// Full transcript of a conversation
    pub fn format_transcript(id: ConversationId, history: &ConversationHistory) -> String {
        let mut output = Self::header(&format!("Conversation {}", id));
        output.push('\n');

        for message in history.messages() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                Self::role_label(message),
                Self::indent(&message.content, "  ")
            ));
        }

        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// One numbered line per message
    pub fn format_message_list(id: ConversationId, history: &ConversationHistory) -> String {
        let mut output = format!(
            "{} {} ({} messages)\n",
            "Conversation".cyan().bold(),
            id,
            history.len()
        );

        for (i, message) in history.messages().iter().enumerate() {
            let preview = truncate(&single_line(&message.content), PREVIEW_WIDTH);
            output.push_str(&format!(
                "{:>3}. {}: {}\n",
                i + 1,
                Self::role_label(message),
                preview
            ));
        }

        output
    }

    /// Numbered model menu; the first entry is the default.
    pub fn format_model_menu(models: &[Model], current: Option<&Model>) -> String {
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        for (i, model) in models.iter().enumerate() {
            let mut line = format!("  {}. {}", i + 1, model);
            if i == 0 {
                line.push_str(&format!(" {}", "(default)".dimmed()));
            }
            if current == Some(model) {
                line.push_str(&format!(" {}", "*".green()));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    pub fn format_model(model: &Model) -> String {
        match model.platform() {
            Some(platform) => format!("{} {} ({})", "Model:".cyan().bold(), model, platform),
            None => format!("{} {}", "Model:".cyan().bold(), model),
        }
    }

    pub fn format_system_prompt(prompt: Option<&str>) -> String {
        match prompt {
            Some(prompt) => format!("{}\n{}", "System prompt:".cyan().bold(), Self::indent(prompt, "  ")),
            None => format!("{}", "No system prompt set".dimmed()),
        }
    }

    pub fn format_data_report(conversations: usize) -> String {
        format!(
            "{} {} stored conversations",
            "Data check:".cyan().bold(),
            conversations
        )
    }

    /// Raw provider payload in debug mode
    pub fn format_debug(payload: &serde_json::Value) -> String {
        let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        format!("{}\n{}", "Raw response:".magenta().bold(), text.dimmed())
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn format_notice(message: &str) -> String {
        format!("{}", message.bright_cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConversationHistory {
        let mut history = ConversationHistory::new().with_system_prompt("Be brief");
        history.push(Message::user("Who was Albert Einstein?\nAnd why?"));
        history.push(Message::assistant("A physicist.", Model::MistralSmall));
        history
    }

    #[test]
    fn test_exchange_contains_query_and_response() {
        let text = ConsoleFormatter::format_exchange(&Model::MistralTiny, "¿Qué es Rust?", "Un lenguaje.");
        assert!(text.contains("mistral-tiny"));
        assert!(text.contains("¿Qué es Rust?"));
        assert!(text.contains("Un lenguaje."));
    }

    #[test]
    fn test_transcript_lists_every_message() {
        let text = ConsoleFormatter::format_transcript(ConversationId::new(4), &sample());
        assert!(text.contains("Conversation 4"));
        assert!(text.contains("  Be brief"));
        assert!(text.contains("  And why?"));
        assert!(text.contains("mistral-small"));
    }

    #[test]
    fn test_message_list_is_one_line_per_message() {
        let text = ConsoleFormatter::format_message_list(ConversationId::new(4), &sample());
        assert!(text.contains("(3 messages)"));
        assert!(text.contains("Who was Albert Einstein? And why?"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_model_menu_is_numbered() {
        let models = Model::default_models();
        let text = ConsoleFormatter::format_model_menu(&models, None);
        assert!(text.contains("1. mistral-tiny"));
        assert!(text.contains("4. mistral-large-2402"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
