//! Progress reporting while a batch of queries is answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while waiting for the model.
///
/// One spinner per query; it is cleared before anything else is printed.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start the spinner for query `current` of `total`.
    pub fn start(&self, current: usize, total: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Query {}/{}", current, total));
        pb.set_message("waiting for the model...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Remove the spinner, if one is running.
    pub fn clear(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|bar| bar.is_some()).unwrap_or(false)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl SimpleProgress {
    pub fn line(current: usize, total: usize) -> String {
        format!("{} Query {}/{}", "->".cyan(), current, total)
    }
}
