//! Configuration file loading for chatline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHATLINE_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./chatline.toml` or `./.chatline.toml`
//! 4. Global: `~/.config/chatline/config.toml` (platform config dir)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
