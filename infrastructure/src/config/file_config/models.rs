//! Model configuration from TOML (`[models]` section)

use chatline_domain::Model;
use serde::{Deserialize, Serialize};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// available = ["mistral-tiny", "mistral-small", "mistral-medium", "mistral-large-2402"]
/// default = "mistral-small"    # skips the start-up model prompt
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Models listed by the model prompt, first one is the default choice
    pub available: Vec<String>,
    /// Model to start with instead of asking
    pub default: Option<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            available: Model::default_models()
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
            default: None,
        }
    }
}

impl FileModelsConfig {
    /// Available models as domain values, blank names skipped.
    pub fn parse_available(&self) -> Vec<Model> {
        self.available
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_model(s))
            .collect()
    }

    pub fn parse_default(&self) -> Option<Model> {
        self.default
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(parse_model)
    }
}

fn parse_model(s: &str) -> Model {
    // Model::from_str is infallible; unknown names become Custom(...)
    let Ok(model) = s.trim().parse::<Model>();
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_skipped() {
        let config = FileModelsConfig {
            available: vec!["mistral-tiny".to_string(), "  ".to_string()],
            default: Some(String::new()),
        };
        assert_eq!(config.parse_available(), vec![Model::MistralTiny]);
        assert_eq!(config.parse_default(), None);
    }
}
