//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application types
//! where the rest of the program needs them.

mod behavior;
mod logging;
mod models;
mod output;
mod provider;
mod repl;
mod storage;

pub use behavior::FileBehaviorConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found by [`FileConfig::validate`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("models.available cannot be empty")]
    NoModels,

    #[error("behavior.query_count_warning cannot be 0")]
    InvalidQueryCountWarning,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Models offered by the model prompt
    pub models: FileModelsConfig,
    /// Chat-completions endpoint settings
    pub provider: FileProviderConfig,
    /// Query handling settings
    pub behavior: FileBehaviorConfig,
    /// Conversation storage settings
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.models.available.is_empty() {
            return Err(ConfigValidationError::NoModels);
        }
        if self.models.available.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyModelName("available"));
        }
        if let Some(default) = &self.models.default
            && default.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName("default"));
        }

        if self.behavior.query_count_warning == 0 {
            return Err(ConfigValidationError::InvalidQueryCountWarning);
        }

        Ok(())
    }
}
