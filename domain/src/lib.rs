//! Domain layer for chatline
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! Every line the user types is classified into an [`Action`]: a command
//! (`/q`, `/l12`, `/new ...`) or a query to answer.
//!
//! ## Query templates
//!
//! Queries may contain `$0<name>` placeholders. Answering a placeholder with
//! `/for a,b,c` fans the query out into one [`ConcreteQuery`] per variant.
//! Only the first placeholder with a variant list fans out; later lists
//! contribute their first entry.
//!
//! ## Conversations
//!
//! A [`ConversationHistory`] is the ordered list of [`Message`]s sent to the
//! model as context, stored under a [`ConversationId`].

pub mod command;
pub mod conversation;
pub mod core;
pub mod template;

// Re-export commonly used types
pub use command::{
    action::Action,
    classifier::{COMMAND_PREFIX, Classified, classify},
};
pub use conversation::{
    entities::{Message, Role, Turn},
    history::ConversationHistory,
    id::ConversationId,
};
pub use core::{
    error::DomainError,
    model::{Model, Platform},
    model_choice::{DEFAULT_MODEL_INDEX, parse_model_choice},
    string::{single_line, truncate},
};
pub use template::{
    ConcreteQuery, PLACEHOLDER_PREFIX, PlaceholderBindings, PlaceholderValue, QueryTemplate,
    Segment, VARIANT_MARKER, expand, extract_placeholders, parse_placeholder_value,
};
