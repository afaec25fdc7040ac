//! Contract management endpoints

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use std::sync::Arc;

use crate::application::dto::{ContractView, CreateContractCommand};
use crate::application::filter_by_updated_after;
use crate::domain::value_objects::{ClientId, ContractId, ValidationError};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_contracts).post(create_contract))
        .route("/:id/amount", put(update_amount))
        .route("/client/:client_id", get(list_active_contracts))
        .route("/client/:client_id/all", get(list_client_contracts))
        .route("/client/:client_id/updated-after", get(list_updated_after))
        .route("/client/:client_id/total", get(active_total))
}

/// Create a contract for an existing client
#[utoipa::path(
    post,
    path = "/contracts",
    request_body = ContractCreate,
    responses(
        (status = 200, body = ContractView),
        (status = 400, description = "Missing client id or invalid amount", body = ErrorResponse),
        (status = 404, description = "Client does not exist", body = ErrorResponse)
    ),
    tag = "contracts"
)]
pub async fn create_contract(
    State(state): State<Arc<ApiState>>,
    ApiJson(input): ApiJson<ContractCreate>,
) -> Result<Json<ContractView>, ApiError> {
    let client_id = input.client_id
        .ok_or_else(|| ApiError::BadRequest("clientId is required".into()))?;
    let cost_amount = input.cost_amount.ok_or(ValidationError::Missing("costAmount"))?;

    let contract = state.contracts.create(CreateContractCommand {
        client_id: ClientId(client_id),
        cost_amount,
        start_date: input.start_date,
        end_date: input.end_date,
    }).await?;

    Ok(Json(state.contracts.to_view(contract).await?))
}

/// List every contract
#[utoipa::path(
    get,
    path = "/contracts",
    responses((status = 200, body = Vec<ContractView>)),
    tag = "contracts"
)]
pub async fn list_contracts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ContractView>>, ApiError> {
    let contracts = state.contracts.list_all().await?;
    Ok(Json(state.contracts.to_views(contracts).await?))
}

/// Active contracts of a client, optionally only those updated after a date
#[utoipa::path(
    get,
    path = "/contracts/client/{client_id}",
    params(
        ("client_id" = i64, Path,),
        ("updatedAfter" = Option<String>, Query, description = "ISO date, exclusive")
    ),
    responses((status = 200, body = Vec<ContractView>)),
    tag = "contracts"
)]
pub async fn list_active_contracts(
    State(state): State<Arc<ApiState>>,
    ApiPath(client_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ActiveContractsQuery>,
) -> Result<Json<Vec<ContractView>>, ApiError> {
    let mut contracts = state.contracts.list_active_for_client(ClientId(client_id)).await?;
    if let Some(cutoff) = query.updated_after {
        contracts = filter_by_updated_after(contracts, cutoff);
    }
    Ok(Json(state.contracts.to_views(contracts).await?))
}

/// Every contract of a client
#[utoipa::path(
    get,
    path = "/contracts/client/{client_id}/all",
    params(("client_id" = i64, Path,)),
    responses((status = 200, body = Vec<ContractView>)),
    tag = "contracts"
)]
pub async fn list_client_contracts(
    State(state): State<Arc<ApiState>>,
    ApiPath(client_id): ApiPath<i64>,
) -> Result<Json<Vec<ContractView>>, ApiError> {
    let contracts = state.contracts.list_all_for_client(ClientId(client_id)).await?;
    Ok(Json(state.contracts.to_views(contracts).await?))
}

/// Active contracts of a client updated strictly after `date`
#[utoipa::path(
    get,
    path = "/contracts/client/{client_id}/updated-after",
    params(
        ("client_id" = i64, Path,),
        ("date" = String, Query, description = "ISO date, exclusive")
    ),
    responses((status = 200, body = Vec<ContractView>)),
    tag = "contracts"
)]
pub async fn list_updated_after(
    State(state): State<Arc<ApiState>>,
    ApiPath(client_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<UpdatedAfterQuery>,
) -> Result<Json<Vec<ContractView>>, ApiError> {
    let contracts = state.contracts.list_active_for_client(ClientId(client_id)).await?;
    let contracts = filter_by_updated_after(contracts, query.date);
    Ok(Json(state.contracts.to_views(contracts).await?))
}

/// Change a contract's cost amount
#[utoipa::path(
    put,
    path = "/contracts/{id}/amount",
    params(
        ("id" = i64, Path,),
        ("value" = f64, Query, description = "New positive cost amount")
    ),
    responses(
        (status = 200, body = ContractView),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "contracts"
)]
pub async fn update_amount(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<AmountQuery>,
) -> Result<Json<ContractView>, ApiError> {
    let contract = state.contracts.update_cost_amount(ContractId(id), query.value).await?;
    Ok(Json(state.contracts.to_view(contract).await?))
}

/// Sum of a client's active contract costs
#[utoipa::path(
    get,
    path = "/contracts/client/{client_id}/total",
    params(("client_id" = i64, Path,)),
    responses((status = 200, body = f64)),
    tag = "contracts"
)]
pub async fn active_total(
    State(state): State<Arc<ApiState>>,
    ApiPath(client_id): ApiPath<i64>,
) -> Result<Json<f64>, ApiError> {
    Ok(Json(state.contracts.active_total(ClientId(client_id)).await?))
}
