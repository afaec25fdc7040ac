//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod company_identifier;
pub mod cost_amount;
pub mod email;
pub mod phone;

pub use company_identifier::{CompanyIdentifier, CompanyIdentifierError};
pub use cost_amount::{CostAmount, CostAmountError};
pub use email::{Email, EmailError};
pub use phone::{Phone, PhoneError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned client identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i64);

/// Store-assigned contract identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub i64);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field-level input errors, raised before any state is touched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
    #[error("{0} is required")]
    Missing(&'static str),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Phone(#[from] PhoneError),
    #[error(transparent)]
    CompanyIdentifier(#[from] CompanyIdentifierError),
    #[error(transparent)]
    CostAmount(#[from] CostAmountError),
}

/// Trim a required text field, rejecting blank input
pub fn non_blank(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}
