//! Model provider adapters implementing the [`LlmGateway`](chatline_application::LlmGateway) port.

pub mod chat_completions;

pub use chat_completions::{ChatCompletionsConfig, HttpChatGateway};
