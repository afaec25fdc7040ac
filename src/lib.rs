//! Insurance Client & Contract API
//!
//! REST service managing insurance clients (people and companies) and the
//! contracts attached to them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  routes (axum)      /clients/*        /contracts/*            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  application        ClientService     ContractService         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ports              ClientRepository  ContractRepository Clock│
//! ├──────────────────────────────────────────────────────────────┤
//! │  infrastructure     InMemoryStore     FixedClock              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients are never removed: deleting one marks it inactive and closes its
//! running contracts. An email may be held by at most one active client.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod infrastructure;
pub mod models;
pub mod ports;
pub mod routes;

use axum::http::Method;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::{ClientService, ContractService, ContractView};
pub use config::ServerConfig;
pub use error::ApiError;
pub use infrastructure::{FixedClock, InMemoryStore};
pub use models::*;
pub use ports::inbound::{ClientUseCases, ContractUseCases, UseCaseError};
pub use ports::outbound::{Clock, SystemClock};

/// API state
#[derive(Clone)]
pub struct ApiState {
    pub clients: Arc<dyn ClientUseCases>,
    pub contracts: Arc<dyn ContractUseCases>,
}

impl ApiState {
    /// Services backed by a fresh in-memory store
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        let store = InMemoryStore::new();
        let client_repo = Arc::new(store.client_repository());
        let contract_repo = Arc::new(store.contract_repository());

        Self {
            clients: Arc::new(ClientService::new(
                client_repo.clone(),
                contract_repo.clone(),
                clock.clone(),
            )),
            contracts: Arc::new(ContractService::new(contract_repo, client_repo, clock)),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insurance API",
        version = "1.0.0",
        description = "Client and contract management"
    ),
    paths(
        routes::health::health_check,
        routes::clients::list_clients,
        routes::clients::get_client,
        routes::clients::create_person,
        routes::clients::create_company,
        routes::clients::update_client,
        routes::clients::restore_client,
        routes::clients::delete_client,
        routes::contracts::create_contract,
        routes::contracts::list_contracts,
        routes::contracts::list_active_contracts,
        routes::contracts::list_client_contracts,
        routes::contracts::list_updated_after,
        routes::contracts::update_amount,
        routes::contracts::active_total,
    ),
    components(
        schemas(
            ErrorResponse, routes::health::HealthResponse,
            ClientResponse, ClientType, PersonCreate, CompanyCreate, ClientUpdate,
            ContractCreate, ContractView
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Client management"),
        (name = "contracts", description = "Contract management")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .nest("/clients", routes::clients::router())
        .nest("/contracts", routes::contracts::router())
        .with_state(Arc::new(state));

    let router = if config.cors_permissive {
        router.layer(cors_layer())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
}
