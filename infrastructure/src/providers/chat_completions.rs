//! Gateway for OpenAI-style `/chat/completions` endpoints (Mistral by default).

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use chatline_application::ports::llm_gateway::{GatewayError, LlmGateway, ModelReply};
use chatline_domain::{Message, Model};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`HttpChatGateway`]
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ChatCompletionsConfig {
    /// Build from the `[provider]` section, reading the key from its env var.
    pub fn from_file_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config.api_key().ok_or_else(|| {
            GatewayError::AuthenticationFailed(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// LLM Gateway speaking the chat-completions HTTP protocol
pub struct HttpChatGateway {
    client: reqwest::Client,
    config: ChatCompletionsConfig,
    models: Vec<Model>,
}

impl HttpChatGateway {
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("HttpChatGateway initialized ({})", config.base_url);

        Ok(Self {
            client,
            config,
            models: Model::default_models(),
        })
    }

    /// Replace the models reported by `available_models`.
    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

/// Request payload for one completion.
fn request_body(model: &Model, messages: &[Message]) -> Value {
    let messages: Vec<Value> = messages
        .iter()
        .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
        .collect();

    json!({
        "model": model.as_str(),
        "messages": messages,
    })
}

/// Pull the first choice's text and the answering model out of a response.
fn parse_completion(data: &Value, requested: &Model) -> Result<(String, Model), GatewayError> {
    let message = data
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| GatewayError::InvalidResponse("Empty content".to_string()))?;

    let model = match data.get("model").and_then(|m| m.as_str()) {
        Some(name) if !name.is_empty() => {
            let Ok(model) = name.parse::<Model>();
            model
        }
        _ => requested.clone(),
    };

    Ok((content.to_string(), model))
}

fn status_error(status: StatusCode, body: String, model: &Model) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::AuthenticationFailed(body),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(model.to_string()),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), body)),
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for HttpChatGateway {
    async fn send(
        &self,
        model: &Model,
        messages: &[Message],
        debug: bool,
    ) -> Result<ModelReply, GatewayError> {
        debug!("Sending {} messages to {}", messages.len(), model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request_body(model, messages))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body, model));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let (content, answered_by) = parse_completion(&data, model)?;
        debug!("Received {} bytes from {}", content.len(), answered_by);

        let reply = ModelReply::new(content, answered_by);
        Ok(if debug { reply.with_raw(data) } else { reply })
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(self.models.clone())
    }
}
