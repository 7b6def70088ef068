//! Conversation identifier

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a stored conversation (Value Object)
///
/// Written and read as plain decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(u64);

impl ConversationId {
    pub const FIRST: ConversationId = ConversationId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse an id typed by the user: ASCII digits only, surrounding
    /// whitespace ignored.
    pub fn from_digits(digits: &str) -> Result<Self, DomainError> {
        let digits = digits.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidConversationId(digits.to_string()));
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidConversationId(digits.to_string()))
    }

    pub fn to_digits(&self) -> String {
        self.0.to_string()
    }

    /// The id after this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConversationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s)
    }
}
