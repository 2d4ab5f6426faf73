//! Firm roles, the static permission catalog, and assignment governance.
//!
//! The role set is closed and totally ordered. Both the role-to-permission
//! table and the hierarchy are compile-time constants exposed through read
//! accessors only; nothing here mutates after process start.

use std::str::FromStr;

use praxia_core::AppError;
use serde::{Deserialize, Serialize};

use crate::security::Permission;

/// A named position in the firm determining a base permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access, including firm settings.
    Administrator,
    /// Firm partner with unrestricted case and client access.
    Partner,
    /// Senior associate working assigned cases.
    SeniorAssociate,
    /// Junior associate working assigned cases.
    JuniorAssociate,
    /// Paralegal supporting assigned cases.
    Paralegal,
    /// External client with access to their own matters.
    Client,
    /// Externally invited viewer with shared-calendar visibility only.
    Guest,
}

const ALL_ROLES: &[Role] = &[
    Role::Administrator,
    Role::Partner,
    Role::SeniorAssociate,
    Role::JuniorAssociate,
    Role::Paralegal,
    Role::Client,
    Role::Guest,
];

// Administrators may assign any role, themselves included.
const ADMINISTRATOR_ASSIGNABLE: &[Role] = ALL_ROLES;

const PARTNER_ASSIGNABLE: &[Role] = &[
    Role::SeniorAssociate,
    Role::JuniorAssociate,
    Role::Paralegal,
    Role::Client,
    Role::Guest,
];

const SENIOR_ASSOCIATE_ASSIGNABLE: &[Role] = &[Role::JuniorAssociate, Role::Paralegal];

const PARTNER_PERMISSIONS: &[Permission] = &[
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
];

const SENIOR_ASSOCIATE_PERMISSIONS: &[Permission] = &[
    Permission::CaseRead,
    Permission::CaseCreate,
    Permission::CaseUpdate,
    Permission::ClientRead,
    Permission::ClientCreate,
    Permission::ClientUpdate,
    Permission::DocumentRead,
    Permission::DocumentUpload,
    Permission::DocumentDelete,
    Permission::CalendarRead,
    Permission::CalendarWrite,
    Permission::BillingRead,
    Permission::BillingWrite,
    Permission::ReportView,
    Permission::UserManageRoles,
];

const JUNIOR_ASSOCIATE_PERMISSIONS: &[Permission] = &[
    Permission::CaseRead,
    Permission::CaseCreate,
    Permission::CaseUpdate,
    Permission::ClientRead,
    Permission::ClientCreate,
    Permission::DocumentRead,
    Permission::DocumentUpload,
    Permission::CalendarRead,
    Permission::CalendarWrite,
    Permission::BillingRead,
];

const PARALEGAL_PERMISSIONS: &[Permission] = &[
    Permission::CaseRead,
    Permission::ClientRead,
    Permission::DocumentRead,
    Permission::DocumentUpload,
    Permission::CalendarRead,
    Permission::CalendarWrite,
];

const CLIENT_PERMISSIONS: &[Permission] = &[
    Permission::CaseRead,
    Permission::DocumentRead,
    Permission::BillingRead,
    Permission::CalendarRead,
];

const GUEST_PERMISSIONS: &[Permission] = &[Permission::CalendarRead];

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Partner => "partner",
            Self::SeniorAssociate => "senior_associate",
            Self::JuniorAssociate => "junior_associate",
            Self::Paralegal => "paralegal",
            Self::Client => "client",
            Self::Guest => "guest",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        ALL_ROLES
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Returns the seniority rank used for hierarchy comparisons.
    ///
    /// Levels are injective: no two roles are peers.
    #[must_use]
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            Self::Administrator => 6,
            Self::Partner => 5,
            Self::SeniorAssociate => 4,
            Self::JuniorAssociate => 3,
            Self::Paralegal => 2,
            Self::Client => 1,
            Self::Guest => 0,
        }
    }

    /// Returns the permission set granted by this role.
    #[must_use]
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Administrator => Permission::all(),
            Self::Partner => PARTNER_PERMISSIONS,
            Self::SeniorAssociate => SENIOR_ASSOCIATE_PERMISSIONS,
            Self::JuniorAssociate => JUNIOR_ASSOCIATE_PERMISSIONS,
            Self::Paralegal => PARALEGAL_PERMISSIONS,
            Self::Client => CLIENT_PERMISSIONS,
            Self::Guest => GUEST_PERMISSIONS,
        }
    }

    /// Returns whether this role holds the permission.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Returns whether this role holds at least one of the permissions.
    #[must_use]
    pub fn has_any(&self, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(*permission))
    }

    /// Returns whether this role holds every one of the permissions.
    #[must_use]
    pub fn has_all(&self, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(*permission))
    }

    /// Returns the roles this role may assign to other users.
    #[must_use]
    pub fn assignable_roles(&self) -> &'static [Role] {
        match self {
            Self::Administrator => ADMINISTRATOR_ASSIGNABLE,
            Self::Partner => PARTNER_ASSIGNABLE,
            Self::SeniorAssociate => SENIOR_ASSOCIATE_ASSIGNABLE,
            Self::JuniorAssociate | Self::Paralegal | Self::Client | Self::Guest => &[],
        }
    }

    /// Returns whether this role may assign `target` to another user.
    #[must_use]
    pub fn can_assign(&self, target: Role) -> bool {
        self.assignable_roles().contains(&target)
    }

    /// Returns whether this role may administratively manage a user of
    /// `target` role.
    ///
    /// Comparison is strict: equal-level management, including
    /// self-management, is always denied.
    #[must_use]
    pub fn can_manage(&self, target: Role) -> bool {
        self.hierarchy_level() > target.hierarchy_level()
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "administrator" => Ok(Self::Administrator),
            "partner" => Ok(Self::Partner),
            "senior_associate" => Ok(Self::SeniorAssociate),
            "junior_associate" => Ok(Self::JuniorAssociate),
            "paralegal" => Ok(Self::Paralegal),
            "client" => Ok(Self::Client),
            "guest" => Ok(Self::Guest),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;
    use crate::security::Permission;

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Guest), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("intern").is_err());
    }

    #[test]
    fn every_role_grants_at_least_one_permission() {
        for role in Role::all() {
            assert!(!role.permissions().is_empty(), "role {role} grants nothing");
        }
    }

    #[test]
    fn permission_checks_are_stable_across_calls() {
        for role in Role::all() {
            for permission in Permission::all() {
                let first = role.has_permission(*permission);
                let second = role.has_permission(*permission);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn hierarchy_levels_are_injective() {
        let roles = Role::all();
        for left in roles {
            for right in roles {
                if left != right {
                    assert_ne!(left.hierarchy_level(), right.hierarchy_level());
                }
            }
        }
    }

    #[test]
    fn has_any_and_has_all_agree_with_membership() {
        assert!(Role::Paralegal.has_any(&[Permission::CaseRead, Permission::CaseDelete]));
        assert!(!Role::Paralegal.has_all(&[Permission::CaseRead, Permission::CaseDelete]));
        assert!(Role::Administrator.has_all(Permission::all()));
        assert!(!Role::Guest.has_any(&[Permission::CaseCreate, Permission::ClientCreate]));
    }

    #[test]
    fn partner_assignable_roles_exclude_partner_and_administrator() {
        let assignable = Role::Partner.assignable_roles();
        assert!(assignable.contains(&Role::SeniorAssociate));
        assert!(assignable.contains(&Role::JuniorAssociate));
        assert!(assignable.contains(&Role::Paralegal));
        assert!(assignable.contains(&Role::Client));
        assert!(assignable.contains(&Role::Guest));
        assert!(!assignable.contains(&Role::Partner));
        assert!(!assignable.contains(&Role::Administrator));
    }

    #[test]
    fn senior_associate_assigns_only_junior_staff() {
        assert!(Role::SeniorAssociate.can_assign(Role::JuniorAssociate));
        assert!(Role::SeniorAssociate.can_assign(Role::Paralegal));
        assert!(!Role::SeniorAssociate.can_assign(Role::Client));
        assert!(!Role::SeniorAssociate.can_assign(Role::SeniorAssociate));
    }

    #[test]
    fn junior_roles_assign_nothing() {
        for role in [Role::JuniorAssociate, Role::Paralegal, Role::Client, Role::Guest] {
            assert!(role.assignable_roles().is_empty());
        }
    }

    #[test]
    fn no_role_manages_itself() {
        for role in Role::all() {
            assert!(!role.can_manage(*role));
        }
    }

    #[test]
    fn management_is_monotonic_in_hierarchy() {
        let roles = Role::all();
        for senior in roles {
            for junior in roles {
                if senior.hierarchy_level() <= junior.hierarchy_level() {
                    continue;
                }
                for target in roles {
                    if junior.can_manage(*target) {
                        assert!(
                            senior.can_manage(*target),
                            "{senior} must manage whatever {junior} manages"
                        );
                    }
                }
            }
        }
    }
}
