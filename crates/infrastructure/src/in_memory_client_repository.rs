use std::collections::HashMap;

use async_trait::async_trait;
use praxia_application::ClientRepository;
use praxia_core::{AppError, AppResult};
use praxia_domain::{ClientId, ClientRecord, ClientStatus};
use tokio::sync::RwLock;

/// In-memory client repository implementation.
///
/// A production implementation must additionally enforce identifier
/// uniqueness with storage constraints; this one only stores records
/// for tests and the development API.
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, ClientRecord>>,
}

impl InMemoryClientRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save_client(&self, client: ClientRecord) -> AppResult<()> {
        let mut clients = self.clients.write().await;

        if clients.contains_key(&client.id) {
            return Err(AppError::Conflict(format!(
                "client '{}' already exists",
                client.id
            )));
        }

        clients.insert(client.id, client);
        Ok(())
    }

    async fn update_client(&self, client: ClientRecord) -> AppResult<()> {
        let mut clients = self.clients.write().await;

        if !clients.contains_key(&client.id) {
            return Err(AppError::NotFound(format!(
                "client '{}' does not exist",
                client.id
            )));
        }

        clients.insert(client.id, client);
        Ok(())
    }

    async fn find_client(&self, client_id: ClientId) -> AppResult<Option<ClientRecord>> {
        Ok(self.clients.read().await.get(&client_id).cloned())
    }

    async fn list_clients(&self) -> AppResult<Vec<ClientRecord>> {
        let clients = self.clients.read().await;

        let mut values: Vec<ClientRecord> = clients.values().cloned().collect();
        values.sort_by(|left, right| {
            left.display_name
                .as_str()
                .cmp(right.display_name.as_str())
        });

        Ok(values)
    }

    async fn list_active_clients(&self) -> AppResult<Vec<ClientRecord>> {
        let clients = self.clients.read().await;

        let mut values: Vec<ClientRecord> = clients
            .values()
            .filter(|client| client.status == ClientStatus::Active)
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            left.display_name
                .as_str()
                .cmp(right.display_name.as_str())
        });

        Ok(values)
    }
}
