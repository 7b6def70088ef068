//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostics to `<data_dir>/logs/chatline.log` instead of stderr
    pub file: bool,
    /// Record every exchange to a JSONL file under `<data_dir>/logs`
    pub conversation_log: bool,
}
