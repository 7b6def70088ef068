//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_queries;
pub mod check_data;
pub mod command_handler;
pub mod extract_queries;
pub mod load_conversation;
pub mod query_guard;
