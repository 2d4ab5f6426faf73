use std::sync::Arc;

use async_trait::async_trait;
use praxia_core::{AppError, AppResult, NonEmptyString};
use praxia_domain::{
    ActorIdentity, AuditAction, ClientId, EmailAddress, Permission, Role, UserId, UserRecord,
};

use crate::audit::{AuditEvent, AuditRepository};
use crate::authorization::require_permission;

/// Input payload for registering a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserInput {
    /// Name shown in listings and audit trails.
    pub display_name: NonEmptyString,
    /// Login email address.
    pub email: EmailAddress,
    /// Initial role.
    pub role: Role,
    /// Linked client record; required meaning only for `Client` users.
    pub client_id: Option<ClientId>,
}

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user.
    async fn save_user(&self, user: UserRecord) -> AppResult<()>;

    /// Finds a user by identifier.
    async fn find_user(&self, user_id: UserId) -> AppResult<Option<UserRecord>>;

    /// Lists all users.
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Replaces a user's role.
    async fn update_role(&self, user_id: UserId, role: Role) -> AppResult<()>;
}

/// Application service for user governance.
///
/// Role changes are gated twice: the actor must hold the blanket
/// `user.manage_roles` permission, and the assignment governor must
/// allow both the new role and the target user's current rank.
#[derive(Clone)]
pub struct UserAdminService {
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditRepository>,
}

impl UserAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, audit: Arc<dyn AuditRepository>) -> Self {
        Self { users, audit }
    }

    /// Lists all user accounts.
    pub async fn list_users(&self, actor: &ActorIdentity) -> AppResult<Vec<UserRecord>> {
        require_permission(actor, Permission::UserManageRoles)?;
        self.users.list_users().await
    }

    /// Returns the roles the actor may assign to others.
    #[must_use]
    pub fn assignable_roles(&self, actor: &ActorIdentity) -> &'static [Role] {
        actor.role().assignable_roles()
    }

    /// Registers a user account with a governor-approved initial role.
    pub async fn register_user(
        &self,
        actor: &ActorIdentity,
        input: RegisterUserInput,
    ) -> AppResult<UserRecord> {
        require_permission(actor, Permission::UserManageRoles)?;

        if !actor.role().can_assign(input.role) {
            return Err(AppError::Forbidden("access denied".to_owned()));
        }

        if input.client_id.is_some() && input.role != Role::Client {
            return Err(AppError::Validation(
                "only client users may link a client record".to_owned(),
            ));
        }

        let user = UserRecord {
            id: UserId::new(),
            display_name: input.display_name,
            email: input.email,
            role: input.role,
            client_id: input.client_id,
        };
        self.users.save_user(user.clone()).await?;

        self.audit
            .append_event(AuditEvent {
                actor: actor.user_id(),
                action: AuditAction::UserRegistered,
                resource_type: "user".to_owned(),
                resource_id: user.id.to_string(),
                detail: Some(format!(
                    "registered '{}' with role '{}'",
                    user.display_name.as_str(),
                    user.role
                )),
            })
            .await?;

        Ok(user)
    }

    /// Changes a user's role under governor rules.
    pub async fn change_role(
        &self,
        actor: &ActorIdentity,
        user_id: UserId,
        new_role: Role,
    ) -> AppResult<UserRecord> {
        require_permission(actor, Permission::UserManageRoles)?;

        let mut target = self
            .users
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        if !actor.role().can_assign(new_role) || !actor.role().can_manage(target.role) {
            return Err(AppError::Forbidden("access denied".to_owned()));
        }

        let previous_role = target.role;
        self.users.update_role(user_id, new_role).await?;
        target.role = new_role;

        self.audit
            .append_event(AuditEvent {
                actor: actor.user_id(),
                action: AuditAction::UserRoleChanged,
                resource_type: "user".to_owned(),
                resource_id: user_id.to_string(),
                detail: Some(format!(
                    "changed role from '{previous_role}' to '{new_role}'"
                )),
            })
            .await?;

        Ok(target)
    }
}
