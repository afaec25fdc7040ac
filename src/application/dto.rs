//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::aggregates::Contract;
use crate::domain::value_objects::ClientId;

#[derive(Clone, Debug)]
pub struct UpdateClientCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateContractCommand {
    pub client_id: ClientId,
    pub cost_amount: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Contract as presented to API callers, with its client's name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    pub id: i64,
    pub cost_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub update_date: NaiveDateTime,
    pub client_id: i64,
    pub client_name: String,
}

impl ContractView {
    pub fn new(contract: &Contract, client_name: impl Into<String>) -> Self {
        Self {
            id: contract.id().0,
            cost_amount: contract.cost_amount().value(),
            start_date: contract.start_date(),
            end_date: contract.end_date(),
            update_date: contract.update_date(),
            client_id: contract.client_id().0,
            client_name: client_name.into(),
        }
    }
}
