use std::sync::Arc;

use async_trait::async_trait;
use praxia_core::{AppError, AppResult, NonEmptyString};
use praxia_domain::{
    ActorIdentity, ClientConflict, ClientId, ClientIdentity, ClientRecord, ClientStatus,
    Permission, find_conflicts,
};

use crate::authorization::require_permission;

/// Input payload for registering or updating a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInput {
    /// Name shown in listings and conflict reports.
    pub display_name: NonEmptyString,
    /// Identifier fields used for conflict matching.
    pub identity: ClientIdentity,
}

/// A persisted client together with its advisory conflict report.
///
/// Identifier collisions do not block registration; the caller decides
/// whether to surface them as warnings or abort a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRegistration {
    /// The persisted record.
    pub client: ClientRecord,
    /// Conflicts detected against existing active clients.
    pub conflicts: Vec<ClientConflict>,
}

/// Repository port for client records.
///
/// The conflict scan in this service is pre-flight only; production
/// implementations must back identifier uniqueness with storage-level
/// constraints to close the check-then-act window.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Persists a new client.
    async fn save_client(&self, client: ClientRecord) -> AppResult<()>;

    /// Replaces an existing client.
    async fn update_client(&self, client: ClientRecord) -> AppResult<()>;

    /// Finds a client by identifier.
    async fn find_client(&self, client_id: ClientId) -> AppResult<Option<ClientRecord>>;

    /// Lists all clients.
    async fn list_clients(&self) -> AppResult<Vec<ClientRecord>>;

    /// Lists clients that currently participate in conflict matching.
    async fn list_active_clients(&self) -> AppResult<Vec<ClientRecord>>;
}

/// Application service for client intake and conflict screening.
#[derive(Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
}

impl ClientService {
    /// Creates a new service from a repository implementation.
    #[must_use]
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Registers a client and reports identifier conflicts advisorily.
    pub async fn register_client(
        &self,
        actor: &ActorIdentity,
        input: ClientInput,
    ) -> AppResult<ClientRegistration> {
        require_permission(actor, Permission::ClientCreate)?;

        let existing = self.clients.list_active_clients().await?;
        let conflicts = find_conflicts(&input.identity, &existing, None);

        let client = ClientRecord {
            id: ClientId::new(),
            display_name: input.display_name,
            identity: input.identity,
            status: ClientStatus::Active,
        };
        self.clients.save_client(client.clone()).await?;

        Ok(ClientRegistration { client, conflicts })
    }

    /// Updates a client, excluding its own prior version from matching.
    pub async fn update_client(
        &self,
        actor: &ActorIdentity,
        client_id: ClientId,
        input: ClientInput,
    ) -> AppResult<ClientRegistration> {
        require_permission(actor, Permission::ClientUpdate)?;

        let mut client = self.find_client(client_id).await?;
        let existing = self.clients.list_active_clients().await?;
        let conflicts = find_conflicts(&input.identity, &existing, Some(client_id));

        client.display_name = input.display_name;
        client.identity = input.identity;
        self.clients.update_client(client.clone()).await?;

        Ok(ClientRegistration { client, conflicts })
    }

    /// Runs the conflict scan without persisting anything.
    pub async fn check_conflicts(
        &self,
        actor: &ActorIdentity,
        candidate: &ClientIdentity,
        exclude_id: Option<ClientId>,
    ) -> AppResult<Vec<ClientConflict>> {
        require_permission(actor, Permission::ClientRead)?;

        let existing = self.clients.list_active_clients().await?;
        Ok(find_conflicts(candidate, &existing, exclude_id))
    }

    /// Returns a client record.
    pub async fn client(
        &self,
        actor: &ActorIdentity,
        client_id: ClientId,
    ) -> AppResult<ClientRecord> {
        require_permission(actor, Permission::ClientRead)?;
        self.find_client(client_id).await
    }

    /// Lists all client records.
    pub async fn list_clients(&self, actor: &ActorIdentity) -> AppResult<Vec<ClientRecord>> {
        require_permission(actor, Permission::ClientRead)?;
        self.clients.list_clients().await
    }

    /// Archives a client, removing it from conflict matching.
    pub async fn archive_client(
        &self,
        actor: &ActorIdentity,
        client_id: ClientId,
    ) -> AppResult<ClientRecord> {
        require_permission(actor, Permission::ClientArchive)?;

        let mut client = self.find_client(client_id).await?;
        client.status = ClientStatus::Archived;
        self.clients.update_client(client.clone()).await?;

        Ok(client)
    }

    async fn find_client(&self, client_id: ClientId) -> AppResult<ClientRecord> {
        self.clients
            .find_client(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("client '{client_id}' does not exist")))
    }
}
