//! Client application service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::application::dto::UpdateClientCommand;
use crate::domain::aggregates::{Client, NewClient};
use crate::domain::value_objects::{non_blank, ClientId, Email, Phone, ValidationError};
use crate::ports::inbound::{ClientUseCases, UseCaseError};
use crate::ports::outbound::{Clock, ClientRepository, ContractRepository};

pub struct ClientService {
    client_repo: Arc<dyn ClientRepository>,
    contract_repo: Arc<dyn ContractRepository>,
    clock: Arc<dyn Clock>,
}

impl ClientService {
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        contract_repo: Arc<dyn ContractRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client_repo,
            contract_repo,
            clock,
        }
    }

    async fn load(&self, id: ClientId) -> Result<Client, UseCaseError> {
        self.client_repo.find_by_id(id).await?
            .ok_or_else(|| UseCaseError::NotFound(format!("client {id}")))
    }

    async fn ensure_email_free(&self, email: &Email) -> Result<(), UseCaseError> {
        if self.client_repo.exists_active_with_email(email).await? {
            warn!(%email, "email already held by an active client");
            return Err(UseCaseError::Conflict(format!("email already in use: {email}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ClientUseCases for ClientService {
    async fn list_active(&self) -> Result<Vec<Client>, UseCaseError> {
        Ok(self.client_repo.find_all_active().await?)
    }

    async fn get(&self, id: ClientId) -> Result<Option<Client>, UseCaseError> {
        Ok(self.client_repo.find_by_id(id).await?)
    }

    async fn create(&self, client: NewClient) -> Result<Client, UseCaseError> {
        self.ensure_email_free(client.email()).await?;

        let client = self.client_repo.insert(client).await?;
        info!(client_id = %client.id(), kind = client.kind().label(), "client created");
        Ok(client)
    }

    // Email uniqueness is deliberately not re-checked here; see DESIGN.md.
    async fn update(&self, id: ClientId, command: UpdateClientCommand) -> Result<Client, UseCaseError> {
        let name = non_blank("name", &command.name)?;
        let email = Email::new(command.email).map_err(ValidationError::from)?;
        let phone = Phone::parse_optional(command.phone.as_deref()).map_err(ValidationError::from)?;

        let mut client = self.load(id).await?;
        client.update_contact_details(name, email, phone);
        self.client_repo.save(&client).await?;

        info!(client_id = %id, "client updated");
        Ok(client)
    }

    async fn restore(&self, id: ClientId) -> Result<Client, UseCaseError> {
        let mut client = self.load(id).await?;
        if client.is_active() {
            debug!(client_id = %id, "client already active");
            return Ok(client);
        }

        // Another active client may have taken the email in the meantime.
        self.ensure_email_free(client.email()).await?;

        client.reactivate();
        self.client_repo.save(&client).await?;
        info!(client_id = %id, "client restored");
        Ok(client)
    }

    async fn delete(&self, id: ClientId) -> Result<(), UseCaseError> {
        let Some(mut client) = self.client_repo.find_by_id(id).await? else {
            debug!(client_id = %id, "delete of unknown client ignored");
            return Ok(());
        };

        let now = self.clock.now();
        let mut originals = Vec::new();
        let mut closed = Vec::new();
        for contract in self.contract_repo.find_by_client(id).await? {
            let mut updated = contract.clone();
            if updated.close(now) {
                originals.push(contract);
                closed.push(updated);
            }
        }

        if !closed.is_empty() {
            self.contract_repo.save_all(&closed).await?;
        }

        client.deactivate();
        if let Err(err) = self.client_repo.save(&client).await {
            if !originals.is_empty() {
                match self.contract_repo.save_all(&originals).await {
                    Ok(()) => warn!(client_id = %id, "client deactivation failed, contract closures rolled back"),
                    Err(rollback) => error!(client_id = %id, error = %rollback, "failed to roll back contract closures"),
                }
            }
            return Err(err.into());
        }

        info!(client_id = %id, closed_contracts = closed.len(), "client soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{Contract, NewContract};
    use crate::domain::value_objects::CostAmount;
    use crate::infrastructure::{FixedClock, InMemoryStore};
    use crate::ports::outbound::RepositoryError;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(14, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        now().date()
    }

    fn person(email: &str) -> NewClient {
        let birth = NaiveDate::from_ymd_opt(1990, 1, 1);
        NewClient::person("Jane", email, Some("+41 22 123-45"), birth).unwrap()
    }

    fn service(store: &InMemoryStore) -> ClientService {
        ClientService::new(
            Arc::new(store.client_repository()),
            Arc::new(store.contract_repository()),
            Arc::new(FixedClock::new(now())),
        )
    }

    async fn add_contract(store: &InMemoryStore, client_id: ClientId, end_date: Option<NaiveDate>) -> Contract {
        let amount = CostAmount::new(100.0).unwrap();
        let created = now() - Duration::days(60);
        store
            .contract_repository()
            .insert(NewContract::new(client_id, amount, None, end_date, created))
            .await
            .unwrap()
    }

    async fn reload(store: &InMemoryStore, contract: &Contract) -> Contract {
        store.contract_repository().find_by_id(contract.id()).await.unwrap().unwrap()
    }

    fn update(name: &str, email: &str, phone: Option<&str>) -> UpdateClientCommand {
        UpdateClientCommand {
            name: name.into(),
            email: email.into(),
            phone: phone.map(Into::into),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_activates() {
        let store = InMemoryStore::new();
        let client = service(&store).create(person("jane@x.com")).await.unwrap();

        assert_eq!(client.id(), ClientId(1));
        assert!(client.is_active());
        assert_eq!(client.phone().map(Phone::as_str), Some("+412212345"));
    }

    #[tokio::test]
    async fn test_create_rejects_active_duplicate_email() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        svc.create(person("jane@x.com")).await.unwrap();

        let result = svc.create(person("jane@x.com")).await;
        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
        assert_eq!(svc.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_of_deleted_client_can_be_reused() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let first = svc.create(person("jane@x.com")).await.unwrap();
        svc.delete(first.id()).await.unwrap();

        let second = svc.create(person("jane@x.com")).await.unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_get_returns_inactive_clients() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();
        svc.delete(client.id()).await.unwrap();

        let found = svc.get(client.id()).await.unwrap().unwrap();
        assert!(!found.is_active());
        assert!(svc.get(ClientId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_changes_contact_fields_only() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();

        let updated = svc
            .update(client.id(), update("Janet", "janet@x.com", Some("079 123-45-67")))
            .await
            .unwrap();

        assert_eq!(updated.name(), "Janet");
        assert_eq!(updated.email().as_str(), "janet@x.com");
        assert_eq!(updated.phone().map(Phone::as_str), Some("0791234567"));
        assert_eq!(updated.birth_date(), client.birth_date());
        assert!(updated.is_active());

        let stored = svc.get(client.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_client() {
        let store = InMemoryStore::new();
        let result = service(&store).update(ClientId(5), update("A", "a@x.com", None)).await;
        assert!(matches!(result, Err(UseCaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_phone() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();

        let result = svc.update(client.id(), update("Jane", "jane@x.com", Some("12"))).await;
        assert!(matches!(result, Err(UseCaseError::Validation(ValidationError::Phone(_)))));
    }

    #[tokio::test]
    async fn test_update_does_not_recheck_email_uniqueness() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        svc.create(person("jane@x.com")).await.unwrap();
        let other = svc.create(person("john@x.com")).await.unwrap();

        let updated = svc.update(other.id(), update("John", "jane@x.com", None)).await.unwrap();
        assert_eq!(updated.email().as_str(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_restore_active_client_is_noop() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();

        let restored = svc.restore(client.id()).await.unwrap();
        assert_eq!(restored, client);
    }

    #[tokio::test]
    async fn test_restore_deleted_client() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();
        svc.delete(client.id()).await.unwrap();

        let restored = svc.restore(client.id()).await.unwrap();
        assert!(restored.is_active());
        assert_eq!(svc.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_restore_refuses_taken_email() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let old = svc.create(person("jane@x.com")).await.unwrap();
        svc.delete(old.id()).await.unwrap();
        svc.create(person("jane@x.com")).await.unwrap();

        let result = svc.restore(old.id()).await;
        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
        assert!(!svc.get(old.id()).await.unwrap().unwrap().is_active());
    }

    #[tokio::test]
    async fn test_restore_missing_client() {
        let store = InMemoryStore::new();
        let result = service(&store).restore(ClientId(3)).await;
        assert!(matches!(result, Err(UseCaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_closes_running_contracts() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();
        let yesterday = today() - Duration::days(1);
        let tomorrow = today() + Duration::days(1);

        let open = add_contract(&store, client.id(), None).await;
        let ended = add_contract(&store, client.id(), Some(yesterday)).await;
        let future = add_contract(&store, client.id(), Some(tomorrow)).await;

        svc.delete(client.id()).await.unwrap();

        assert_eq!(reload(&store, &open).await.end_date(), Some(today()));
        assert_eq!(reload(&store, &ended).await, ended);
        assert_eq!(reload(&store, &future).await.end_date(), Some(today()));
        assert!(!svc.get(client.id()).await.unwrap().unwrap().is_active());
        assert!(svc.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_is_harmless() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let client = svc.create(person("jane@x.com")).await.unwrap();
        let contract = add_contract(&store, client.id(), None).await;

        svc.delete(client.id()).await.unwrap();
        let after_first = store.contract_repository().find_by_id(contract.id()).await.unwrap();
        svc.delete(client.id()).await.unwrap();
        let after_second = store.contract_repository().find_by_id(contract.id()).await.unwrap();

        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_delete_unknown_client_is_ignored() {
        let store = InMemoryStore::new();
        assert!(service(&store).delete(ClientId(404)).await.is_ok());
    }

    /// Client repository whose saves can be made to fail
    struct FlakyClientRepository {
        inner: crate::infrastructure::InMemoryClientRepository,
        fail_saves: AtomicBool,
    }

    #[async_trait]
    impl ClientRepository for FlakyClientRepository {
        async fn insert(&self, client: NewClient) -> Result<Client, RepositoryError> {
            self.inner.insert(client).await
        }
        async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
            self.inner.find_by_id(id).await
        }
        async fn find_all_active(&self) -> Result<Vec<Client>, RepositoryError> {
            self.inner.find_all_active().await
        }
        async fn exists_active_with_email(&self, email: &Email) -> Result<bool, RepositoryError> {
            self.inner.exists_active_with_email(email).await
        }
        async fn save(&self, client: &Client) -> Result<(), RepositoryError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(RepositoryError::Storage("disk full".into()));
            }
            self.inner.save(client).await
        }
    }

    #[tokio::test]
    async fn test_delete_rolls_back_contracts_when_client_save_fails() {
        let store = InMemoryStore::new();
        let clients = Arc::new(FlakyClientRepository {
            inner: store.client_repository(),
            fail_saves: AtomicBool::new(false),
        });
        let svc = ClientService::new(
            clients.clone(),
            Arc::new(store.contract_repository()),
            Arc::new(FixedClock::new(now())),
        );
        let client = svc.create(person("jane@x.com")).await.unwrap();
        let contract = add_contract(&store, client.id(), None).await;

        clients.fail_saves.store(true, Ordering::SeqCst);
        let result = svc.delete(client.id()).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
        let reloaded = store.contract_repository().find_by_id(contract.id()).await.unwrap();
        assert_eq!(reloaded, Some(contract));
        assert!(svc.get(client.id()).await.unwrap().unwrap().is_active());
    }
}
