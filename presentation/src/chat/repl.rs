//! REPL (Read-Eval-Print Loop) for interactive chat

use super::view::ConsoleView;
use crate::config::ReplConfig;
use chatline_application::{ChatError, ChatSession, ChatView, CommandHandler, Flow};
use chatline_domain::classify;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing::{error, info, warn};

const PROMPT: &str = ">>> ";

/// Interactive chat REPL
pub struct ChatRepl {
    handler: CommandHandler,
    view: Arc<ConsoleView>,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(handler: CommandHandler, view: Arc<ConsoleView>) -> Self {
        Self {
            handler,
            view,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until the user exits.
    ///
    /// Returns an error only for internal failures; everything else is
    /// reported and the loop goes on.
    pub async fn run(&self, session: &mut ChatSession) -> Result<(), ChatError> {
        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            self.view.load_history(path);
        }

        self.view.print_welcome(session.model());

        let result = self.read_eval_loop(session).await;

        if let Some(ref path) = history_path {
            self.view.save_history(path);
        }

        result
    }

    async fn read_eval_loop(&self, session: &mut ChatSession) -> Result<(), ChatError> {
        loop {
            let line = match self.view.read_line(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    return Ok(());
                }
                Err(err) => {
                    error!("Input error: {}", err);
                    self.view.show_error(&err.to_string());
                    return Ok(());
                }
            };

            if !line.trim().is_empty() {
                self.view.add_history_entry(line.trim());
            }

            match self.handler.process(classify(&line), session).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    println!("Bye!");
                    return Ok(());
                }
                Err(e) if e.is_internal() => {
                    error!("Internal error, stopping: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    if e.is_user_input() {
                        info!("Rejected input: {}", e);
                    } else {
                        warn!("Command failed: {}", e);
                    }
                    self.view.show_error(&e.to_string());
                }
            }
        }
    }
}
