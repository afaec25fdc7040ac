//! Inbound ports (Use case traits)
//!
//! What the HTTP layer can ask of the services.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::*;
use crate::domain::aggregates::{Client, Contract, NewClient};
use crate::domain::value_objects::{ClientId, ContractId, ValidationError};
use crate::ports::outbound::RepositoryError;

/// Client management use cases
#[async_trait]
pub trait ClientUseCases: Send + Sync {
    /// Active clients only
    async fn list_active(&self) -> Result<Vec<Client>, UseCaseError>;

    /// Any client by id; absence is not an error
    async fn get(&self, id: ClientId) -> Result<Option<Client>, UseCaseError>;

    /// Store a validated client, refusing emails held by an active client
    async fn create(&self, client: NewClient) -> Result<Client, UseCaseError>;

    /// Replace name, email and phone
    async fn update(&self, id: ClientId, command: UpdateClientCommand) -> Result<Client, UseCaseError>;

    /// Re-activate a soft-deleted client
    async fn restore(&self, id: ClientId) -> Result<Client, UseCaseError>;

    /// Soft delete, closing the client's running contracts
    async fn delete(&self, id: ClientId) -> Result<(), UseCaseError>;
}

/// Contract management use cases
#[async_trait]
pub trait ContractUseCases: Send + Sync {
    /// Open a contract for an existing client
    async fn create(&self, command: CreateContractCommand) -> Result<Contract, UseCaseError>;

    /// Every contract
    async fn list_all(&self) -> Result<Vec<Contract>, UseCaseError>;

    /// Contracts of the client still running today
    async fn list_active_for_client(&self, client_id: ClientId) -> Result<Vec<Contract>, UseCaseError>;

    /// Every contract of the client
    async fn list_all_for_client(&self, client_id: ClientId) -> Result<Vec<Contract>, UseCaseError>;

    /// Change the cost and refresh the update timestamp
    async fn update_cost_amount(&self, id: ContractId, amount: f64) -> Result<Contract, UseCaseError>;

    /// Sum of the active contracts' cost
    async fn active_total(&self, client_id: ClientId) -> Result<f64, UseCaseError>;

    /// Attach the client's name for presentation
    async fn to_view(&self, contract: Contract) -> Result<ContractView, UseCaseError>;

    /// Attach client names for presentation
    async fn to_views(&self, contracts: Vec<Contract>) -> Result<Vec<ContractView>, UseCaseError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UseCaseError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
