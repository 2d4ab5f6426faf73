//! Translation from engine decisions to application errors.
//!
//! Denials surface as [`AppError::Forbidden`] with a deliberately
//! generic message: the response must not reveal whether the resource
//! exists or why access was refused.

use praxia_core::{AppError, AppResult};
use praxia_domain::{
    ActorIdentity, CaseRecord, DocumentRecord, Permission, can_access_case, can_access_document,
};

/// Ensures the actor's role holds the permission.
pub fn require_permission(actor: &ActorIdentity, permission: Permission) -> AppResult<()> {
    if actor.role().has_permission(permission) {
        Ok(())
    } else {
        Err(forbidden())
    }
}

/// Ensures the actor may access the specific case.
pub fn require_case_access(actor: &ActorIdentity, case: &CaseRecord) -> AppResult<()> {
    if can_access_case(actor, case) {
        Ok(())
    } else {
        Err(forbidden())
    }
}

/// Ensures the actor may access the specific document.
pub fn require_document_access(actor: &ActorIdentity, document: &DocumentRecord) -> AppResult<()> {
    if can_access_document(actor, document) {
        Ok(())
    } else {
        Err(forbidden())
    }
}

fn forbidden() -> AppError {
    AppError::Forbidden("access denied".to_owned())
}

#[cfg(test)]
mod tests {
    use praxia_core::AppError;
    use praxia_domain::{ActorIdentity, Permission, Role, UserId};

    use super::require_permission;

    #[test]
    fn granted_permission_passes() {
        let actor = ActorIdentity::new(UserId::new(), "Partner", Role::Partner, None);
        assert!(require_permission(&actor, Permission::CaseCreate).is_ok());
    }

    #[test]
    fn missing_permission_is_forbidden_with_generic_message() {
        let actor = ActorIdentity::new(UserId::new(), "Guest", Role::Guest, None);
        let result = require_permission(&actor, Permission::CaseCreate);

        match result {
            Err(AppError::Forbidden(message)) => assert_eq!(message, "access denied"),
            other => panic!("expected forbidden, got {other:?}"),
        }
    }
}
