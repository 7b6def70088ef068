//! Conversation domain entities

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Assistant messages remember which model produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            model: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            model: None,
        }
    }

    pub fn assistant(content: impl Into<String>, model: Model) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            model: Some(model),
        }
    }
}

/// One exchange: the query sent and the answer the model gave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub query: String,
    pub response: String,
    pub model: Model,
}

impl Turn {
    pub fn new(query: impl Into<String>, response: impl Into<String>, model: Model) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            model,
        }
    }

    /// The user and assistant messages this turn adds to a history
    pub fn messages(&self) -> [Message; 2] {
        [
            Message::user(self.query.clone()),
            Message::assistant(self.response.clone(), self.model.clone()),
        ]
    }
}
