//! Email Value Object
//!
//! Validated email address. Uniqueness among active clients is enforced by
//! the client service, not here.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Email value object with validation
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new validated email
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_PATTERN.is_match(&value) {
            return Err(EmailError::InvalidFormat(value));
        }

        Ok(Self(value))
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}
