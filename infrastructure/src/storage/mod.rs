//! Conversation storage adapters

mod json_repository;

pub use json_repository::JsonConversationRepository;
