//! Phone Value Object
//!
//! Phone numbers are stored without separators: spaces and hyphens are
//! stripped before validation, so `+41 22 123-45` is kept as `+412212345`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{7,15}$").expect("phone pattern compiles"));

/// Normalized phone number
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Normalize and validate a raw phone number
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let normalized = Self::normalize(raw);

        if normalized.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !PHONE_PATTERN.is_match(&normalized) {
            return Err(PhoneError::InvalidFormat(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, PhoneError> {
        raw.map(Self::parse).transpose()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(raw: &str) -> String {
        raw.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone number cannot be empty")]
    Empty,
    #[error("invalid phone number format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_strips_separators() {
        let phone = Phone::parse("+41 22 123-45").unwrap();
        assert_eq!(phone.as_str(), "+412212345");
    }

    #[test]
    fn test_phone_without_plus() {
        let phone = Phone::parse("079-123 45 67").unwrap();
        assert_eq!(phone.as_str(), "0791234567");
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(Phone::parse("123456").is_err());
        assert!(Phone::parse("1234567").is_ok());
        assert!(Phone::parse("+123456789012345").is_ok());
        assert!(Phone::parse("1234567890123456").is_err());
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert!(matches!(Phone::parse("+41 22 ABC 45 67"), Err(PhoneError::InvalidFormat(_))));
    }

    #[test]
    fn test_phone_plus_only_leading() {
        assert!(Phone::parse("41+221234567").is_err());
    }

    #[test]
    fn test_empty_phone() {
        assert!(matches!(Phone::parse(" - "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_optional_phone() {
        assert_eq!(Phone::parse_optional(None).unwrap(), None);
        assert!(Phone::parse_optional(Some("  ")).is_err());
        assert!(Phone::parse_optional(Some("0221234567")).unwrap().is_some());
    }
}
