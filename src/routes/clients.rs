//! Client management endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use std::sync::Arc;

use crate::application::dto::UpdateClientCommand;
use crate::domain::aggregates::NewClient;
use crate::domain::value_objects::ClientId;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::ports::inbound::UseCaseError;
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_clients))
        .route("/person", post(create_person))
        .route("/company", post(create_company))
        .route("/:id", get(get_client).put(update_client).delete(delete_client))
        .route("/:id/restore", put(restore_client))
}

/// List active clients
#[utoipa::path(
    get,
    path = "/clients",
    responses((status = 200, description = "Active clients", body = Vec<ClientResponse>)),
    tag = "clients"
)]
pub async fn list_clients(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.clients.list_active().await?;
    Ok(Json(clients.iter().map(ClientResponse::from).collect()))
}

/// Get client by ID, active or not
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(("id" = i64, Path,)),
    responses(
        (status = 200, body = ClientResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn get_client(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = state.clients.get(ClientId(id)).await?
        .ok_or_else(|| UseCaseError::NotFound(format!("client {id}")))?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/clients/person",
    request_body = PersonCreate,
    responses(
        (status = 200, body = ClientResponse),
        (status = 400, body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn create_person(
    State(state): State<Arc<ApiState>>,
    ApiJson(input): ApiJson<PersonCreate>,
) -> Result<Json<ClientResponse>, ApiError> {
    let person = NewClient::person(
        &input.name,
        &input.email,
        input.phone.as_deref(),
        input.birth_date,
    )?;
    let client = state.clients.create(person).await?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/clients/company",
    request_body = CompanyCreate,
    responses(
        (status = 200, body = ClientResponse),
        (status = 400, body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn create_company(
    State(state): State<Arc<ApiState>>,
    ApiJson(input): ApiJson<CompanyCreate>,
) -> Result<Json<ClientResponse>, ApiError> {
    let company = NewClient::company(
        &input.name,
        &input.email,
        input.phone.as_deref(),
        &input.company_identifier,
    )?;
    let client = state.clients.create(company).await?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Update name, email and phone
#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(("id" = i64, Path,)),
    request_body = ClientUpdate,
    responses(
        (status = 200, body = ClientResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn update_client(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<ClientUpdate>,
) -> Result<Json<ClientResponse>, ApiError> {
    let command = UpdateClientCommand {
        name: input.name,
        email: input.email,
        phone: input.phone,
    };
    let client = state.clients.update(ClientId(id), command).await?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Restore a soft-deleted client
#[utoipa::path(
    put,
    path = "/clients/{id}/restore",
    params(("id" = i64, Path,)),
    responses(
        (status = 200, body = ClientResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    ),
    tag = "clients"
)]
pub async fn restore_client(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = state.clients.restore(ClientId(id)).await?;
    Ok(Json(ClientResponse::from(&client)))
}

/// Soft delete a client and close its running contracts
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(("id" = i64, Path,)),
    responses((status = 204, description = "Client deactivated or unknown")),
    tag = "clients"
)]
pub async fn delete_client(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(ClientId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
