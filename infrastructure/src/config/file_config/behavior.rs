//! Behavior configuration from TOML (`[behavior]` section)

use chatline_application::config::{BehaviorConfig, DEFAULT_QUERY_COUNT_WARNING};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Ask for confirmation when a template expands to more queries than this
    pub query_count_warning: usize,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            query_count_warning: DEFAULT_QUERY_COUNT_WARNING,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::default().with_query_count_warning(self.query_count_warning)
    }
}
