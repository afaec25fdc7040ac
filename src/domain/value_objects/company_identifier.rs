//! Company identifier, three letters, a hyphen and three digits (`abc-123`).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{3}-[0-9]{3}$").expect("identifier pattern compiles"));

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompanyIdentifier(String);

impl CompanyIdentifier {
    pub fn new(value: impl Into<String>) -> Result<Self, CompanyIdentifierError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(CompanyIdentifierError::Empty);
        }

        if !IDENTIFIER_PATTERN.is_match(&value) {
            return Err(CompanyIdentifierError::InvalidFormat(value));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyIdentifierError {
    #[error("company identifier cannot be empty")]
    Empty,
    #[error("company identifier must follow the pattern 'aaa-123', got {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier() {
        assert_eq!(CompanyIdentifier::new("abc-123").unwrap().as_str(), "abc-123");
        assert!(CompanyIdentifier::new("XyZ-007").is_ok());
    }

    #[test]
    fn test_invalid_identifier() {
        assert!(matches!(CompanyIdentifier::new(""), Err(CompanyIdentifierError::Empty)));
        assert!(CompanyIdentifier::new("ab-123").is_err());
        assert!(CompanyIdentifier::new("abc123").is_err());
        assert!(CompanyIdentifier::new("abc-12a").is_err());
        assert!(CompanyIdentifier::new(" abc-123").is_err());
    }
}
