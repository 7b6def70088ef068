//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding conversations and logs
    pub data_dir: Option<String>,
}

impl FileStorageConfig {
    /// Configured directory, or `<platform data dir>/chatline`.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| d.join("chatline")),
        }
    }
}
