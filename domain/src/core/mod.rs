//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: available chat models
//! - [`model_choice::parse_model_choice`]: model selection parsing
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod model_choice;
pub mod string;
