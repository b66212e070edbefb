//! Viewer locale tags.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Normalized locale tag as reported by the viewer's client.
///
/// Clients report either `en_US` or `en-US`; both normalize to `en-US` with
/// a lowercase language subtag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(tag: impl Into<String>) -> Result<Self, DomainError> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(DomainError::parse("Locale tag cannot be empty"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::parse(format!("Invalid locale tag: {}", trimmed)));
        }

        let mut parts = trimmed.split(['-', '_']).filter(|p| !p.is_empty());
        let language = match parts.next() {
            Some(language) => language.to_ascii_lowercase(),
            None => return Err(DomainError::parse(format!("Invalid locale tag: {}", trimmed))),
        };
        let normalized = std::iter::once(language)
            .chain(parts.map(str::to_string))
            .collect::<Vec<_>>()
            .join("-");
        Ok(Self(normalized))
    }

    /// English, the catalog every lookup falls back to.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, e.g. `pt` for `pt-BR`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> String {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_underscores_and_case() {
        let tag = LocaleTag::new("PT_BR").unwrap();
        assert_eq!(tag.as_str(), "pt-BR");
        assert_eq!(tag.language(), "pt");
    }

    #[test]
    fn bare_language_is_its_own_language() {
        let tag = LocaleTag::new("he").unwrap();
        assert_eq!(tag.language(), "he");
    }

    #[test]
    fn rejects_garbage() {
        assert!(LocaleTag::new("").is_err());
        assert!(LocaleTag::new("en US").is_err());
        assert!(LocaleTag::new("--").is_err());
    }
}
