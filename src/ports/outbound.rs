//! Outbound ports
//!
//! Interfaces the services need from the outside world: record storage and
//! the current date.

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::aggregates::{Client, Contract, NewClient, NewContract};
use crate::domain::value_objects::{ClientId, ContractId, Email};

/// Client repository port
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Store a new client and assign its id
    async fn insert(&self, client: NewClient) -> Result<Client, RepositoryError>;

    /// Find client by ID, active or not
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError>;

    /// All clients with the active flag set
    async fn find_all_active(&self) -> Result<Vec<Client>, RepositoryError>;

    /// Whether an active client already uses this email
    async fn exists_active_with_email(&self, email: &Email) -> Result<bool, RepositoryError>;

    /// Overwrite an existing client
    async fn save(&self, client: &Client) -> Result<(), RepositoryError>;
}

/// Contract repository port
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Store a new contract and assign its id
    async fn insert(&self, contract: NewContract) -> Result<Contract, RepositoryError>;

    /// Find contract by ID
    async fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, RepositoryError>;

    /// Every contract
    async fn find_all(&self) -> Result<Vec<Contract>, RepositoryError>;

    /// Every contract of a client
    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Contract>, RepositoryError>;

    /// Contracts of a client with no end date or one after `as_of`
    async fn find_active_by_client(
        &self,
        client_id: ClientId,
        as_of: NaiveDate,
    ) -> Result<Vec<Contract>, RepositoryError>;

    /// Overwrite an existing contract
    async fn save(&self, contract: &Contract) -> Result<(), RepositoryError>;

    /// Overwrite several contracts at once
    async fn save_all(&self, contracts: &[Contract]) -> Result<(), RepositoryError>;
}

/// Source of "today" and "now"
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Repository error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}
