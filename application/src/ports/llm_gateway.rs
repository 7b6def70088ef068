//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat model provider.

use async_trait::async_trait;
use chatline_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A model's answer to one request
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    /// Text of the assistant message
    pub content: String,
    /// Model that actually answered, as reported by the provider
    pub model: Model,
    /// Raw provider payload, filled in when the request was sent in debug mode
    pub raw: Option<serde_json::Value>,
}

impl ModelReply {
    pub fn new(content: impl Into<String>, model: Model) -> Self {
        Self {
            content: content.into(),
            model,
            raw: None,
        }
    }

    pub fn with_raw(mut self, raw: serde_json::Value) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer. A failed call
/// is reported as is; callers never retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the whole conversation so far (ending with the new user
    /// message) and return the model's answer.
    async fn send(
        &self,
        model: &Model,
        messages: &[Message],
        debug: bool,
    ) -> Result<ModelReply, GatewayError>;

    /// Get available models
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}
