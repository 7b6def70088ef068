//! Infrastructure layer for chatline
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileProviderConfig, FileReplConfig, FileStorageConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{ChatCompletionsConfig, HttpChatGateway};
pub use storage::JsonConversationRepository;
