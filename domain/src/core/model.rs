//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Provider platform a model is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Mistral,
    OpenAI,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Mistral => write!(f, "Mistral"),
            Platform::OpenAI => write!(f, "OpenAI"),
        }
    }
}

/// Available LLM models (Value Object)
///
/// Known Mistral chat models get their own variant; anything else the
/// provider accepts is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    MistralTiny,
    MistralSmall,
    MistralMedium,
    MistralLarge2402,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::MistralTiny => "mistral-tiny",
            Model::MistralSmall => "mistral-small",
            Model::MistralMedium => "mistral-medium",
            Model::MistralLarge2402 => "mistral-large-2402",
            Model::Custom(s) => s,
        }
    }

    /// Models offered when nothing is configured, default first
    pub fn default_models() -> Vec<Model> {
        vec![
            Model::MistralTiny,
            Model::MistralSmall,
            Model::MistralMedium,
            Model::MistralLarge2402,
        ]
    }

    /// Platform serving this model, when it can be told from the id
    pub fn platform(&self) -> Option<Platform> {
        let id = self.as_str();
        if id.starts_with("mistral-")
            || id.starts_with("open-mistral")
            || id.starts_with("open-mixtral")
            || id.starts_with("codestral")
        {
            Some(Platform::Mistral)
        } else if id.starts_with("gpt-") || id.starts_with("o1") || id.starts_with("o3") {
            Some(Platform::OpenAI)
        } else {
            None
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::MistralTiny
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "mistral-tiny" => Model::MistralTiny,
            "mistral-small" => Model::MistralSmall,
            "mistral-medium" => Model::MistralMedium,
            "mistral-large-2402" => Model::MistralLarge2402,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
