//! API Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::aggregates::{Client, ClientKind};

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ============ Clients ============

/// Client as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_identifier: Option<String>,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        let client_type = match client.kind() {
            ClientKind::Person { .. } => ClientType::Person,
            ClientKind::Company { .. } => ClientType::Company,
        };
        Self {
            id: client.id().0,
            client_type,
            name: client.name().to_string(),
            email: client.email().to_string(),
            phone: client.phone().map(|p| p.to_string()),
            active: client.is_active(),
            birth_date: client.birth_date(),
            company_identifier: client.company_identifier().map(|c| c.to_string()),
        }
    }
}

/// Client variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Person,
    Company,
}

/// Person creation request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Company creation request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_identifier: String,
}

/// Client update request. Only these fields can change after creation;
/// anything else in the body is ignored.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// ============ Contracts ============

/// Contract creation request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractCreate {
    pub client_id: Option<i64>,
    pub cost_amount: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Optional updated-after filter on the active contract listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContractsQuery {
    pub updated_after: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedAfterQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub value: f64,
}
