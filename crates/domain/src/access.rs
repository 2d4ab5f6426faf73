//! Per-instance resource authorization.
//!
//! Blanket permission checks live on [`Role`]; the functions here answer
//! the narrower question of whether a specific actor may touch a
//! specific record. Both are pure: denials are booleans, and translating
//! them into responses is the caller's concern.

use crate::case::CaseRecord;
use crate::document::DocumentRecord;
use crate::role::Role;
use crate::security::Permission;
use crate::user::ActorIdentity;

/// Returns whether the actor may access the case.
///
/// Administrators and partners see every case. Associates and paralegals
/// must own the case or appear in its collaborator set. Client users see
/// exactly the cases conducted for their linked client record; guests
/// see nothing.
#[must_use]
pub fn can_access_case(actor: &ActorIdentity, case: &CaseRecord) -> bool {
    match actor.role() {
        Role::Administrator | Role::Partner => true,
        Role::SeniorAssociate | Role::JuniorAssociate | Role::Paralegal => {
            case.is_assigned(actor.user_id())
        }
        Role::Client => actor.client_id() == Some(case.client_id),
        Role::Guest => false,
    }
}

/// Returns whether the actor may access the document.
///
/// Administrators see every document. Partners see everything except
/// confidential documents. Every other role falls back to the blanket
/// `document.read` permission with no per-instance restriction.
#[must_use]
pub fn can_access_document(actor: &ActorIdentity, document: &DocumentRecord) -> bool {
    match actor.role() {
        Role::Administrator => true,
        Role::Partner => !document.confidential,
        Role::SeniorAssociate
        | Role::JuniorAssociate
        | Role::Paralegal
        | Role::Client
        | Role::Guest => actor.role().has_permission(Permission::DocumentRead),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use praxia_core::NonEmptyString;

    use super::{can_access_case, can_access_document};
    use crate::case::{CaseId, CaseRecord};
    use crate::client::ClientId;
    use crate::document::{DocumentId, DocumentRecord};
    use crate::role::Role;
    use crate::user::{ActorIdentity, UserId};

    fn actor(role: Role, user_id: UserId) -> ActorIdentity {
        ActorIdentity::new(user_id, "Test Actor", role, None)
    }

    fn case(owner: UserId, collaborators: BTreeSet<UserId>, client_id: ClientId) -> CaseRecord {
        CaseRecord {
            id: CaseId::new(),
            title: NonEmptyString::new("Harmon v. Calloway")
                .unwrap_or_else(|_| panic!("test title")),
            owner,
            collaborators,
            client_id,
        }
    }

    fn document(confidential: bool) -> DocumentRecord {
        DocumentRecord {
            id: DocumentId::new(),
            case_id: CaseId::new(),
            title: NonEmptyString::new("Settlement Draft")
                .unwrap_or_else(|_| panic!("test title")),
            confidential,
        }
    }

    #[test]
    fn administrator_and_partner_access_every_case() {
        let case = case(UserId::new(), BTreeSet::new(), ClientId::new());

        assert!(can_access_case(&actor(Role::Administrator, UserId::new()), &case));
        assert!(can_access_case(&actor(Role::Partner, UserId::new()), &case));
    }

    #[test]
    fn junior_associate_needs_assignment() {
        let partner = UserId::new();
        let collaborator = UserId::new();
        let outsider = UserId::new();
        let case = case(partner, BTreeSet::from([collaborator]), ClientId::new());

        assert!(can_access_case(&actor(Role::JuniorAssociate, collaborator), &case));
        assert!(!can_access_case(&actor(Role::JuniorAssociate, outsider), &case));
    }

    #[test]
    fn staff_owner_accesses_their_own_case() {
        let owner = UserId::new();
        let case = case(owner, BTreeSet::new(), ClientId::new());

        assert!(can_access_case(&actor(Role::SeniorAssociate, owner), &case));
        assert!(can_access_case(&actor(Role::Paralegal, owner), &case));
    }

    #[test]
    fn client_accesses_only_their_own_cases() {
        let client_id = ClientId::new();
        let case = case(UserId::new(), BTreeSet::new(), client_id);
        let linked = ActorIdentity::new(UserId::new(), "Client", Role::Client, Some(client_id));
        let other = ActorIdentity::new(
            UserId::new(),
            "Other Client",
            Role::Client,
            Some(ClientId::new()),
        );
        let unlinked = ActorIdentity::new(UserId::new(), "Unlinked", Role::Client, None);

        assert!(can_access_case(&linked, &case));
        assert!(!can_access_case(&other, &case));
        assert!(!can_access_case(&unlinked, &case));
    }

    #[test]
    fn guest_accesses_no_case() {
        let user_id = UserId::new();
        let case = case(user_id, BTreeSet::new(), ClientId::new());

        assert!(!can_access_case(&actor(Role::Guest, user_id), &case));
    }

    #[test]
    fn administrator_accesses_confidential_documents() {
        assert!(can_access_document(
            &actor(Role::Administrator, UserId::new()),
            &document(true)
        ));
    }

    #[test]
    fn partner_is_excluded_from_confidential_documents() {
        let partner = actor(Role::Partner, UserId::new());

        assert!(can_access_document(&partner, &document(false)));
        assert!(!can_access_document(&partner, &document(true)));
    }

    #[test]
    fn blanket_permission_roles_ignore_the_confidential_flag() {
        // Roles below partner carry no per-instance restriction beyond
        // the blanket document.read permission.
        let senior = actor(Role::SeniorAssociate, UserId::new());

        assert!(can_access_document(&senior, &document(true)));
        assert!(can_access_document(&senior, &document(false)));
    }

    #[test]
    fn guest_has_no_blanket_document_permission() {
        assert!(!can_access_document(&actor(Role::Guest, UserId::new()), &document(false)));
    }
}
