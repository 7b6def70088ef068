//! Guard against launching too many queries at once.

use crate::ports::view::ChatView;
use std::sync::Arc;
use tracing::info;

pub struct QueryCountGuard {
    view: Arc<dyn ChatView>,
    warning_threshold: usize,
}

impl QueryCountGuard {
    pub fn new(view: Arc<dyn ChatView>, warning_threshold: usize) -> Self {
        Self {
            view,
            warning_threshold,
        }
    }

    /// True when `count` exceeds the threshold and the user declines to go on.
    pub fn should_cancel(&self, count: usize) -> bool {
        if count <= self.warning_threshold {
            return false;
        }
        let cancel = !self.view.confirm_large_batch(count);
        if cancel {
            info!("Batch of {} queries declined", count);
        }
        cancel
    }
}
