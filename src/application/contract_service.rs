//! Contract application service

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::application::dto::{ContractView, CreateContractCommand};
use crate::domain::aggregates::{Contract, NewContract};
use crate::domain::value_objects::{ClientId, ContractId, CostAmount, ValidationError};
use crate::ports::inbound::{ContractUseCases, UseCaseError};
use crate::ports::outbound::{Clock, ClientRepository, ContractRepository};

/// Keep contracts last updated on a day strictly after `cutoff`.
///
/// Uses the same date-only comparison as the active-contract rule.
pub fn filter_by_updated_after(contracts: Vec<Contract>, cutoff: NaiveDate) -> Vec<Contract> {
    contracts
        .into_iter()
        .filter(|contract| contract.updated_after(cutoff))
        .collect()
}

pub struct ContractService {
    contract_repo: Arc<dyn ContractRepository>,
    client_repo: Arc<dyn ClientRepository>,
    clock: Arc<dyn Clock>,
}

impl ContractService {
    pub fn new(
        contract_repo: Arc<dyn ContractRepository>,
        client_repo: Arc<dyn ClientRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contract_repo,
            client_repo,
            clock,
        }
    }

    async fn client_name(&self, client_id: ClientId) -> Result<String, UseCaseError> {
        let client = self.client_repo.find_by_id(client_id).await?
            .ok_or_else(|| UseCaseError::NotFound(format!("client {client_id}")))?;
        Ok(client.name().to_string())
    }
}

#[async_trait]
impl ContractUseCases for ContractService {
    async fn create(&self, command: CreateContractCommand) -> Result<Contract, UseCaseError> {
        let amount = CostAmount::new(command.cost_amount).map_err(ValidationError::from)?;

        let client = self.client_repo.find_by_id(command.client_id).await?
            .ok_or_else(|| UseCaseError::NotFound(format!("client {}", command.client_id)))?;

        let contract = NewContract::new(
            client.id(),
            amount,
            command.start_date,
            command.end_date,
            self.clock.now(),
        );
        let contract = self.contract_repo.insert(contract).await?;

        info!(contract_id = %contract.id(), client_id = %client.id(), "contract created");
        Ok(contract)
    }

    async fn list_all(&self) -> Result<Vec<Contract>, UseCaseError> {
        Ok(self.contract_repo.find_all().await?)
    }

    async fn list_active_for_client(&self, client_id: ClientId) -> Result<Vec<Contract>, UseCaseError> {
        let today = self.clock.today();
        Ok(self.contract_repo.find_active_by_client(client_id, today).await?)
    }

    async fn list_all_for_client(&self, client_id: ClientId) -> Result<Vec<Contract>, UseCaseError> {
        Ok(self.contract_repo.find_by_client(client_id).await?)
    }

    async fn update_cost_amount(&self, id: ContractId, amount: f64) -> Result<Contract, UseCaseError> {
        let amount = CostAmount::new(amount).map_err(ValidationError::from)?;

        let mut contract = self.contract_repo.find_by_id(id).await?
            .ok_or_else(|| UseCaseError::NotFound(format!("contract {id}")))?;

        contract.update_cost_amount(amount, self.clock.now());
        self.contract_repo.save(&contract).await?;

        info!(contract_id = %id, amount = amount.value(), "contract cost updated");
        Ok(contract)
    }

    async fn active_total(&self, client_id: ClientId) -> Result<f64, UseCaseError> {
        let active = self.list_active_for_client(client_id).await?;
        Ok(active.iter().fold(0.0, |total, c| total + c.cost_amount().value()))
    }

    async fn to_view(&self, contract: Contract) -> Result<ContractView, UseCaseError> {
        let name = self.client_name(contract.client_id()).await?;
        Ok(ContractView::new(&contract, name))
    }

    async fn to_views(&self, contracts: Vec<Contract>) -> Result<Vec<ContractView>, UseCaseError> {
        let mut names: HashMap<ClientId, String> = HashMap::new();
        let mut views = Vec::with_capacity(contracts.len());

        for contract in &contracts {
            let client_id = contract.client_id();
            if !names.contains_key(&client_id) {
                names.insert(client_id, self.client_name(client_id).await?);
            }
            views.push(ContractView::new(contract, names[&client_id].as_str()));
        }

        Ok(views)
    }
}
