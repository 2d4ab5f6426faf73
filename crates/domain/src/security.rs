use std::str::FromStr;

use praxia_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions enforced by application policy checks.
///
/// The set is closed and compiled in; nothing is derived from storage
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows reading case records.
    CaseRead,
    /// Allows opening new cases.
    CaseCreate,
    /// Allows updating case records and assignments.
    CaseUpdate,
    /// Allows deleting case records.
    CaseDelete,
    /// Allows reading client records.
    ClientRead,
    /// Allows registering new clients.
    ClientCreate,
    /// Allows updating client records.
    ClientUpdate,
    /// Allows archiving client records.
    ClientArchive,
    /// Allows reading document metadata and content.
    DocumentRead,
    /// Allows attaching documents to cases.
    DocumentUpload,
    /// Allows removing documents from cases.
    DocumentDelete,
    /// Allows reading calendar events.
    CalendarRead,
    /// Allows scheduling and cancelling calendar events.
    CalendarWrite,
    /// Allows reading invoices and time entries.
    BillingRead,
    /// Allows creating invoices and time entries.
    BillingWrite,
    /// Allows approving expense submissions.
    ExpenseApprove,
    /// Allows viewing practice reports.
    ReportView,
    /// Allows changing user roles.
    UserManageRoles,
    /// Allows changing firm-wide settings.
    FirmSettingsManage,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseRead => "case.read",
            Self::CaseCreate => "case.create",
            Self::CaseUpdate => "case.update",
            Self::CaseDelete => "case.delete",
            Self::ClientRead => "client.read",
            Self::ClientCreate => "client.create",
            Self::ClientUpdate => "client.update",
            Self::ClientArchive => "client.archive",
            Self::DocumentRead => "document.read",
            Self::DocumentUpload => "document.upload",
            Self::DocumentDelete => "document.delete",
            Self::CalendarRead => "calendar.read",
            Self::CalendarWrite => "calendar.write",
            Self::BillingRead => "billing.read",
            Self::BillingWrite => "billing.write",
            Self::ExpenseApprove => "expense.approve",
            Self::ReportView => "report.view",
            Self::UserManageRoles => "user.manage_roles",
            Self::FirmSettingsManage => "firm.settings.manage",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::CaseRead,
            Permission::CaseCreate,
            Permission::CaseUpdate,
            Permission::CaseDelete,
            Permission::ClientRead,
            Permission::ClientCreate,
            Permission::ClientUpdate,
            Permission::ClientArchive,
            Permission::DocumentRead,
            Permission::DocumentUpload,
            Permission::DocumentDelete,
            Permission::CalendarRead,
            Permission::CalendarWrite,
            Permission::BillingRead,
            Permission::BillingWrite,
            Permission::ExpenseApprove,
            Permission::ReportView,
            Permission::UserManageRoles,
            Permission::FirmSettingsManage,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "case.read" => Ok(Self::CaseRead),
            "case.create" => Ok(Self::CaseCreate),
            "case.update" => Ok(Self::CaseUpdate),
            "case.delete" => Ok(Self::CaseDelete),
            "client.read" => Ok(Self::ClientRead),
            "client.create" => Ok(Self::ClientCreate),
            "client.update" => Ok(Self::ClientUpdate),
            "client.archive" => Ok(Self::ClientArchive),
            "document.read" => Ok(Self::DocumentRead),
            "document.upload" => Ok(Self::DocumentUpload),
            "document.delete" => Ok(Self::DocumentDelete),
            "calendar.read" => Ok(Self::CalendarRead),
            "calendar.write" => Ok(Self::CalendarWrite),
            "billing.read" => Ok(Self::BillingRead),
            "billing.write" => Ok(Self::BillingWrite),
            "expense.approve" => Ok(Self::ExpenseApprove),
            "report.view" => Ok(Self::ReportView),
            "user.manage_roles" => Ok(Self::UserManageRoles),
            "firm.settings.manage" => Ok(Self::FirmSettingsManage),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Stable audit actions emitted by governance use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a user account is registered.
    UserRegistered,
    /// Emitted when a user's role is changed.
    UserRoleChanged,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRegistered => "user.registered",
            Self::UserRoleChanged => "user.role_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Permission;

    #[test]
    fn permission_roundtrip_storage_value() {
        for permission in Permission::all() {
            let restored = Permission::from_str(permission.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Permission::CaseRead), *permission);
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("case.unknown");
        assert!(parsed.is_err());
    }
}
