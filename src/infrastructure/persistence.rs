//! In-memory repository implementations
//!
//! Both repositories share one table set behind a single lock so that the
//! client/contract relationship stays consistent. Ids are handed out in
//! increasing order starting at 1, one sequence per table.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::domain::aggregates::{Client, Contract, NewClient, NewContract};
use crate::domain::value_objects::{ClientId, ContractId, Email};
use crate::ports::outbound::{ClientRepository, ContractRepository, RepositoryError};

#[derive(Default)]
struct Tables {
    clients: BTreeMap<ClientId, Client>,
    contracts: BTreeMap<ContractId, Contract>,
    last_client_id: i64,
    last_contract_id: i64,
}

/// Shared storage backing the in-memory repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_repository(&self) -> InMemoryClientRepository {
        InMemoryClientRepository { tables: Arc::clone(&self.tables) }
    }

    pub fn contract_repository(&self) -> InMemoryContractRepository {
        InMemoryContractRepository { tables: Arc::clone(&self.tables) }
    }
}

/// In-memory client repository
#[derive(Clone)]
pub struct InMemoryClientRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert(&self, client: NewClient) -> Result<Client, RepositoryError> {
        let mut tables = self.tables.write();
        tables.last_client_id += 1;
        let client = client.into_client(ClientId(tables.last_client_id));
        tables.clients.insert(client.id(), client.clone());
        Ok(client)
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        Ok(self.tables.read().clients.get(&id).cloned())
    }

    async fn find_all_active(&self) -> Result<Vec<Client>, RepositoryError> {
        let tables = self.tables.read();
        Ok(tables.clients.values()
            .filter(|c| c.is_active())
            .cloned()
            .collect())
    }

    async fn exists_active_with_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        let tables = self.tables.read();
        Ok(tables.clients.values().any(|c| c.is_active() && c.email() == email))
    }

    async fn save(&self, client: &Client) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write();
        match tables.clients.get_mut(&client.id()) {
            Some(stored) => {
                *stored = client.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("client {}", client.id()))),
        }
    }
}

/// In-memory contract repository
#[derive(Clone)]
pub struct InMemoryContractRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl ContractRepository for InMemoryContractRepository {
    async fn insert(&self, contract: NewContract) -> Result<Contract, RepositoryError> {
        let mut tables = self.tables.write();
        if !tables.clients.contains_key(&contract.client_id()) {
            return Err(RepositoryError::NotFound(format!("client {}", contract.client_id())));
        }
        tables.last_contract_id += 1;
        let contract = contract.into_contract(ContractId(tables.last_contract_id));
        tables.contracts.insert(contract.id(), contract.clone());
        Ok(contract)
    }

    async fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, RepositoryError> {
        Ok(self.tables.read().contracts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Contract>, RepositoryError> {
        Ok(self.tables.read().contracts.values().cloned().collect())
    }

    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Contract>, RepositoryError> {
        let tables = self.tables.read();
        Ok(tables.contracts.values()
            .filter(|c| c.client_id() == client_id)
            .cloned()
            .collect())
    }

    async fn find_active_by_client(
        &self,
        client_id: ClientId,
        as_of: NaiveDate,
    ) -> Result<Vec<Contract>, RepositoryError> {
        let tables = self.tables.read();
        Ok(tables.contracts.values()
            .filter(|c| c.client_id() == client_id && c.is_active_on(as_of))
            .cloned()
            .collect())
    }

    async fn save(&self, contract: &Contract) -> Result<(), RepositoryError> {
        self.save_all(std::slice::from_ref(contract)).await
    }

    async fn save_all(&self, contracts: &[Contract]) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write();
        if let Some(missing) = contracts.iter().find(|c| !tables.contracts.contains_key(&c.id())) {
            return Err(RepositoryError::NotFound(format!("contract {}", missing.id())));
        }
        for contract in contracts {
            tables.contracts.insert(contract.id(), contract.clone());
        }
        Ok(())
    }
}
