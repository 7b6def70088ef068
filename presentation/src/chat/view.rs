//! Console implementation of the chat view

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::help::{HELP_PAUSE_PROMPT, help_text};
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use chatline_application::ChatView;
use chatline_domain::{
    ConversationHistory, ConversationId, Model, PLACEHOLDER_PREFIX, parse_model_choice,
};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Answers accepted by the large-batch confirmation
const YES: [&str; 5] = ["y", "yes", "s", "si", "sí"];

/// Terminal view: prompts through rustyline, prints with colored.
///
/// The REPL reads its input lines through the same editor, so one history
/// covers both.
pub struct ConsoleView {
    editor: Mutex<DefaultEditor>,
    progress: ProgressReporter,
    show_progress: bool,
}

impl ConsoleView {
    pub fn new(config: &OutputConfig) -> rustyline::Result<Self> {
        if !config.color {
            colored::control::set_override(false);
        }

        Ok(Self {
            editor: Mutex::new(DefaultEditor::new()?),
            progress: ProgressReporter::new(),
            show_progress: config.show_progress,
        })
    }

    fn editor(&self) -> MutexGuard<'_, DefaultEditor> {
        self.editor.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read one line of input.
    pub fn read_line(&self, prompt: &str) -> Result<String, ReadlineError> {
        self.progress.clear();
        self.editor().readline(prompt)
    }

    pub fn add_history_entry(&self, line: &str) {
        let _ = self.editor().add_history_entry(line);
    }

    pub fn load_history(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = self.editor().load_history(path) {
            debug!("No input history loaded from {}: {}", path.display(), e);
        }
    }

    pub fn save_history(&self, path: &Path) {
        if let Err(e) = self.editor().save_history(path) {
            debug!("Could not save input history to {}: {}", path.display(), e);
        }
    }

    /// Ask a question; `None` when the user hits Ctrl-C or Ctrl-D.
    fn ask(&self, question: &str) -> Option<String> {
        println!("\n{}", question.bright_cyan());
        match self.read_line("> ") {
            Ok(answer) => Some(answer),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                self.show_error(&e.to_string());
                None
            }
        }
    }

    fn print(&self, text: &str) {
        self.progress.clear();
        println!("{}", text);
    }

    pub fn print_welcome(&self, model: &Model) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                  chatline                   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::format_model(model));
        println!("Type /help for placeholders and commands, /q to quit.");
        println!();
    }
}

impl ChatView for ConsoleView {
    fn prompt_placeholder_value(&self, name: &str) -> String {
        self.ask(&format!("Value for {}{}:", PLACEHOLDER_PREFIX, name))
            .unwrap_or_default()
    }

    fn show_progress(&self, current: usize, total: usize) {
        if self.show_progress {
            self.progress.start(current, total);
        } else if total > 1 {
            println!("{}", SimpleProgress::line(current, total));
        }
    }

    fn show_exchange(&self, model: &Model, query: &str, response: &str) {
        self.print(&ConsoleFormatter::format_exchange(model, query, response));
    }

    fn show_debug(&self, payload: &serde_json::Value) {
        self.print(&ConsoleFormatter::format_debug(payload));
    }

    fn show_error(&self, message: &str) {
        self.progress.clear();
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn show_notice(&self, message: &str) {
        self.print(&ConsoleFormatter::format_notice(message));
    }

    fn confirm_large_batch(&self, count: usize) -> bool {
        let question = format!("{} queries are about to be sent. Continue? [y/N]", count);
        self.ask(&question)
            .map(|answer| YES.contains(&answer.trim().to_lowercase().as_str()))
            .unwrap_or(false)
    }

    fn show_help(&self) {
        self.print(&help_text());
        // Any answer, Ctrl-C and Ctrl-D included, just dismisses the help.
        println!();
        let _ = self.read_line(HELP_PAUSE_PROMPT);
    }

    fn show_model(&self, model: &Model) {
        self.print(&ConsoleFormatter::format_model(model));
    }

    fn choose_model(&self, models: &[Model]) -> Model {
        self.print(&ConsoleFormatter::format_model_menu(models, None));
        loop {
            let Some(answer) = self.ask("Model number (Enter for the default):") else {
                return models.first().cloned().unwrap_or_default();
            };
            match parse_model_choice(&answer, models) {
                Ok(model) => return model.clone(),
                Err(e) => self.show_error(&e.to_string()),
            }
        }
    }

    fn show_conversation(&self, id: ConversationId, history: &ConversationHistory) {
        self.print(&ConsoleFormatter::format_transcript(id, history));
    }

    fn show_messages(&self, id: ConversationId, history: &ConversationHistory) {
        self.print(&ConsoleFormatter::format_message_list(id, history));
    }

    fn show_system_prompt(&self, prompt: Option<&str>) {
        self.print(&ConsoleFormatter::format_system_prompt(prompt));
    }

    fn show_data_report(&self, conversations: usize) {
        self.print(&ConsoleFormatter::format_data_report(conversations));
    }
}
