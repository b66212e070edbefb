//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Within length limits (counted in characters, not bytes)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Shortest claim name accepted after trimming
pub const MIN_CLAIM_NAME_LENGTH: usize = 1;

/// Longest claim name accepted after trimming
pub const MAX_CLAIM_NAME_LENGTH: usize = 50;

// ============================================================================
// ClaimName
// ============================================================================

/// A validated claim name (1..=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimName(String);

impl ClaimName {
    /// Create a new validated claim name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        let length = trimmed.chars().count();
        if length < MIN_CLAIM_NAME_LENGTH {
            return Err(DomainError::validation("Claim name cannot be empty"));
        }
        if length > MAX_CLAIM_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Claim name cannot exceed {} characters",
                MAX_CLAIM_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClaimName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ClaimName> for String {
    fn from(name: ClaimName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = ClaimName::new("  Treehouse  ").unwrap();
        assert_eq!(name.as_str(), "Treehouse");
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert!(ClaimName::new("a").is_ok());
        assert!(ClaimName::new("x".repeat(MAX_CLAIM_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(ClaimName::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(ClaimName::new("   \t "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_fifty_one_characters() {
        let err = ClaimName::new("y".repeat(MAX_CLAIM_NAME_LENGTH + 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Claim name cannot exceed 50 characters"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 50 two-byte characters is still a valid name
        let name = "é".repeat(MAX_CLAIM_NAME_LENGTH);
        assert!(ClaimName::new(name).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: ClaimName = serde_json::from_str("\" Base \"").unwrap();
        assert_eq!(ok.as_str(), "Base");
        assert!(serde_json::from_str::<ClaimName>("\"\"").is_err());
    }
}
