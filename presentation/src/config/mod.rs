//! Presentation-level configuration
//!
//! Configuration for console output and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Draw a spinner while waiting for the model
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    pub fn with_history_file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.history_file = path.map(Into::into);
        self
    }

    /// Configured history file, or `<platform data dir>/chatline/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("chatline").join("history.txt")))
    }
}
