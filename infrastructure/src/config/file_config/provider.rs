//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Chat-completions endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Environment variable name for the API key (default: "MISTRAL_API_KEY").
    pub api_key_env: String,
    /// Timeout in seconds for one model call
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FileProviderConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
