use async_trait::async_trait;
use praxia_application::{AuditEvent, AuditRepository};
use praxia_core::AppResult;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory audit trail that also logs each event.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty in-memory audit trail.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all recorded events, oldest first.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            actor = %event.actor,
            action = event.action.as_str(),
            resource_type = event.resource_type.as_str(),
            resource_id = event.resource_id.as_str(),
            "audit event"
        );

        self.events.write().await.push(event);
        Ok(())
    }
}
