//! Client Aggregate
//!
//! A client is either a person or a company. Both share the contact fields
//! and the active flag; the variant-specific field is fixed at creation.

use chrono::NaiveDate;

use crate::domain::value_objects::{
    non_blank, ClientId, CompanyIdentifier, Email, Phone, ValidationError,
};

/// Client aggregate root
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    id: ClientId,
    name: String,
    email: Email,
    phone: Option<Phone>,
    active: bool,
    kind: ClientKind,
}

/// Variant-specific client data
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientKind {
    Person { birth_date: NaiveDate },
    Company { company_identifier: CompanyIdentifier },
}

impl ClientKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person { .. } => "person",
            Self::Company { .. } => "company",
        }
    }
}

/// Validated client that has not been stored yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    name: String,
    email: Email,
    phone: Option<Phone>,
    kind: ClientKind,
}

impl NewClient {
    /// Validate a person's fields
    pub fn person(
        name: &str,
        email: &str,
        phone: Option<&str>,
        birth_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let birth_date = birth_date.ok_or(ValidationError::Missing("birthDate"))?;
        Self::validate(name, email, phone, ClientKind::Person { birth_date })
    }

    /// Validate a company's fields
    pub fn company(
        name: &str,
        email: &str,
        phone: Option<&str>,
        company_identifier: &str,
    ) -> Result<Self, ValidationError> {
        let company_identifier = CompanyIdentifier::new(company_identifier)?;
        Self::validate(name, email, phone, ClientKind::Company { company_identifier })
    }

    fn validate(
        name: &str,
        email: &str,
        phone: Option<&str>,
        kind: ClientKind,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            email: Email::new(email)?,
            phone: Phone::parse_optional(phone)?,
            kind,
        })
    }

    pub fn email(&self) -> &Email { &self.email }

    /// Attach the store-assigned id. New clients always start active.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            active: true,
            kind: self.kind,
        }
    }
}

impl Client {
    pub fn id(&self) -> ClientId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &Email { &self.email }
    pub fn phone(&self) -> Option<&Phone> { self.phone.as_ref() }
    pub fn is_active(&self) -> bool { self.active }
    pub fn kind(&self) -> &ClientKind { &self.kind }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        match &self.kind {
            ClientKind::Person { birth_date } => Some(*birth_date),
            ClientKind::Company { .. } => None,
        }
    }

    pub fn company_identifier(&self) -> Option<&CompanyIdentifier> {
        match &self.kind {
            ClientKind::Company { company_identifier } => Some(company_identifier),
            ClientKind::Person { .. } => None,
        }
    }

    /// Overwrite the contact fields. Birth date, company identifier, id and
    /// active state are out of reach.
    pub fn update_contact_details(&mut self, name: String, email: Email, phone: Option<Phone>) {
        self.name = name;
        self.email = email;
        self.phone = phone;
    }

    /// Mark the client inactive. Returns false if it already was.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Mark the client active again. Returns false if it already was.
    pub fn reactivate(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }
}
