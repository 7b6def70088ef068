//! Application-level configuration.
//!
//! Controls how the dispatch use cases behave.

/// Expanded query count above which the user must confirm a batch.
pub const DEFAULT_QUERY_COUNT_WARNING: usize = 5;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Batches larger than this ask for confirmation before running.
    pub query_count_warning: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            query_count_warning: DEFAULT_QUERY_COUNT_WARNING,
        }
    }
}

impl BehaviorConfig {
    pub fn with_query_count_warning(mut self, limit: usize) -> Self {
        self.query_count_warning = limit;
        self
    }
}
