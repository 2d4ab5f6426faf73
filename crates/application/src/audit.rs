use async_trait::async_trait;
use praxia_core::AppResult;
use praxia_domain::{AuditAction, UserId};

/// Audit event appended by governance use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// User who performed the action.
    pub actor: UserId,
    /// Stable action identifier.
    pub action: AuditAction,
    /// Type of the affected resource.
    pub resource_type: String,
    /// Identifier of the affected resource.
    pub resource_id: String,
    /// Optional human-readable detail.
    pub detail: Option<String>,
}

/// Repository port for appending audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends one event to the audit trail.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}
