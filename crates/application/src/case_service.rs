use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use praxia_core::{AppError, AppResult, NonEmptyString};
use praxia_domain::{
    ActorIdentity, CaseId, CaseRecord, ClientId, DocumentId, DocumentRecord, Permission, Role,
    UserId, can_access_case,
};

use crate::authorization::{require_case_access, require_document_access, require_permission};
use crate::user_admin_service::UserRepository;

/// Input payload for opening a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCaseInput {
    /// Case title.
    pub title: NonEmptyString,
    /// Owning partner.
    pub owner: UserId,
    /// Client the case is conducted for.
    pub client_id: ClientId,
}

/// Input payload for attaching a document to a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachDocumentInput {
    /// Document title.
    pub title: NonEmptyString,
    /// Excludes the document from partner blanket access when set.
    pub confidential: bool,
}

/// Repository port for case records.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Persists a new case.
    async fn save_case(&self, case: CaseRecord) -> AppResult<()>;

    /// Replaces an existing case.
    async fn update_case(&self, case: CaseRecord) -> AppResult<()>;

    /// Finds a case by identifier.
    async fn find_case(&self, case_id: CaseId) -> AppResult<Option<CaseRecord>>;

    /// Lists all cases.
    async fn list_cases(&self) -> AppResult<Vec<CaseRecord>>;
}

/// Repository port for document metadata.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persists a new document.
    async fn save_document(&self, document: DocumentRecord) -> AppResult<()>;

    /// Finds a document by identifier.
    async fn find_document(&self, document_id: DocumentId) -> AppResult<Option<DocumentRecord>>;

    /// Lists the documents attached to a case.
    async fn list_documents_for_case(&self, case_id: CaseId) -> AppResult<Vec<DocumentRecord>>;

    /// Removes a document.
    async fn delete_document(&self, document_id: DocumentId) -> AppResult<()>;
}

/// Application service for case and document workflows.
#[derive(Clone)]
pub struct CaseService {
    cases: Arc<dyn CaseRepository>,
    documents: Arc<dyn DocumentRepository>,
    users: Arc<dyn UserRepository>,
}

impl CaseService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        cases: Arc<dyn CaseRepository>,
        documents: Arc<dyn DocumentRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            cases,
            documents,
            users,
        }
    }

    /// Opens a case for a client under an owning partner.
    pub async fn create_case(
        &self,
        actor: &ActorIdentity,
        input: CreateCaseInput,
    ) -> AppResult<CaseRecord> {
        require_permission(actor, Permission::CaseCreate)?;

        let owner = self
            .users
            .find_user(input.owner)
            .await?
            .ok_or_else(|| AppError::Validation("case owner does not exist".to_owned()))?;

        if owner.role != Role::Partner {
            return Err(AppError::Validation(
                "case owner must be a partner".to_owned(),
            ));
        }

        let case = CaseRecord {
            id: CaseId::new(),
            title: input.title,
            owner: input.owner,
            collaborators: BTreeSet::new(),
            client_id: input.client_id,
        };
        self.cases.save_case(case.clone()).await?;

        Ok(case)
    }

    /// Returns a case the actor may access.
    pub async fn case(&self, actor: &ActorIdentity, case_id: CaseId) -> AppResult<CaseRecord> {
        require_permission(actor, Permission::CaseRead)?;

        let case = self.find_case(case_id).await?;
        require_case_access(actor, &case)?;

        Ok(case)
    }

    /// Lists the cases the actor may access.
    pub async fn list_cases(&self, actor: &ActorIdentity) -> AppResult<Vec<CaseRecord>> {
        require_permission(actor, Permission::CaseRead)?;

        let mut cases = self.cases.list_cases().await?;
        cases.retain(|case| can_access_case(actor, case));

        Ok(cases)
    }

    /// Adds a staff collaborator to a case.
    pub async fn add_collaborator(
        &self,
        actor: &ActorIdentity,
        case_id: CaseId,
        user_id: UserId,
    ) -> AppResult<CaseRecord> {
        require_permission(actor, Permission::CaseUpdate)?;

        let mut case = self.find_case(case_id).await?;
        require_case_access(actor, &case)?;

        let collaborator = self
            .users
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::Validation("collaborator does not exist".to_owned()))?;

        match collaborator.role {
            Role::SeniorAssociate | Role::JuniorAssociate | Role::Paralegal => {}
            _ => {
                return Err(AppError::Validation(
                    "collaborators must be associates or paralegals".to_owned(),
                ));
            }
        }

        case.collaborators.insert(user_id);
        self.cases.update_case(case.clone()).await?;

        Ok(case)
    }

    /// Attaches a document to a case the actor may access.
    pub async fn attach_document(
        &self,
        actor: &ActorIdentity,
        case_id: CaseId,
        input: AttachDocumentInput,
    ) -> AppResult<DocumentRecord> {
        require_permission(actor, Permission::DocumentUpload)?;

        let case = self.find_case(case_id).await?;
        require_case_access(actor, &case)?;

        let document = DocumentRecord {
            id: DocumentId::new(),
            case_id,
            title: input.title,
            confidential: input.confidential,
        };
        self.documents.save_document(document.clone()).await?;

        Ok(document)
    }

    /// Returns a document the actor may access.
    pub async fn document(
        &self,
        actor: &ActorIdentity,
        document_id: DocumentId,
    ) -> AppResult<DocumentRecord> {
        require_permission(actor, Permission::DocumentRead)?;

        let document = self.find_document(document_id).await?;
        require_document_access(actor, &document)?;

        Ok(document)
    }

    /// Lists the documents attached to a case the actor may access.
    pub async fn list_documents(
        &self,
        actor: &ActorIdentity,
        case_id: CaseId,
    ) -> AppResult<Vec<DocumentRecord>> {
        require_permission(actor, Permission::DocumentRead)?;

        let case = self.find_case(case_id).await?;
        require_case_access(actor, &case)?;

        self.documents.list_documents_for_case(case_id).await
    }

    /// Removes a document the actor may access.
    pub async fn remove_document(
        &self,
        actor: &ActorIdentity,
        document_id: DocumentId,
    ) -> AppResult<()> {
        require_permission(actor, Permission::DocumentDelete)?;

        let document = self.find_document(document_id).await?;
        require_document_access(actor, &document)?;

        self.documents.delete_document(document_id).await
    }

    async fn find_case(&self, case_id: CaseId) -> AppResult<CaseRecord> {
        self.cases
            .find_case(case_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("case '{case_id}' does not exist")))
    }

    async fn find_document(&self, document_id: DocumentId) -> AppResult<DocumentRecord> {
        self.documents
            .find_document(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("document '{document_id}' does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use praxia_core::{AppError, AppResult, NonEmptyString};
    use praxia_domain::{
        ActorIdentity, CaseId, CaseRecord, ClientId, DocumentId, DocumentRecord, EmailAddress,
        Role, UserId, UserRecord,
    };
    use tokio::sync::Mutex;

    use crate::user_admin_service::UserRepository;

    use super::{
        AttachDocumentInput, CaseRepository, CaseService, CreateCaseInput, DocumentRepository,
    };

    #[derive(Default)]
    struct FakeCaseRepository {
        cases: Mutex<HashMap<CaseId, CaseRecord>>,
    }

    #[async_trait]
    impl CaseRepository for FakeCaseRepository {
        async fn save_case(&self, case: CaseRecord) -> AppResult<()> {
            self.cases.lock().await.insert(case.id, case);
            Ok(())
        }

        async fn update_case(&self, case: CaseRecord) -> AppResult<()> {
            self.cases.lock().await.insert(case.id, case);
            Ok(())
        }

        async fn find_case(&self, case_id: CaseId) -> AppResult<Option<CaseRecord>> {
            Ok(self.cases.lock().await.get(&case_id).cloned())
        }

        async fn list_cases(&self) -> AppResult<Vec<CaseRecord>> {
            Ok(self.cases.lock().await.values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct FakeDocumentRepository {
        documents: Mutex<HashMap<DocumentId, DocumentRecord>>,
    }

    #[async_trait]
    impl DocumentRepository for FakeDocumentRepository {
        async fn save_document(&self, document: DocumentRecord) -> AppResult<()> {
            self.documents.lock().await.insert(document.id, document);
            Ok(())
        }

        async fn find_document(
            &self,
            document_id: DocumentId,
        ) -> AppResult<Option<DocumentRecord>> {
            Ok(self.documents.lock().await.get(&document_id).cloned())
        }

        async fn list_documents_for_case(
            &self,
            case_id: CaseId,
        ) -> AppResult<Vec<DocumentRecord>> {
            Ok(self
                .documents
                .lock()
                .await
                .values()
                .filter(|document| document.case_id == case_id)
                .cloned()
                .collect())
        }

        async fn delete_document(&self, document_id: DocumentId) -> AppResult<()> {
            self.documents.lock().await.remove(&document_id);
            Ok(())
        }
    }

    struct FakeUserRepository {
        users: HashMap<UserId, UserRecord>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn save_user(&self, _user: UserRecord) -> AppResult<()> {
            Ok(())
        }

        async fn find_user(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
            Ok(self.users.get(&user_id).cloned())
        }

        async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
            Ok(self.users.values().cloned().collect())
        }

        async fn update_role(&self, _user_id: UserId, _role: Role) -> AppResult<()> {
            Ok(())
        }
    }

    fn user(role: Role) -> UserRecord {
        UserRecord {
            id: UserId::new(),
            display_name: NonEmptyString::new("Test User")
                .unwrap_or_else(|_| panic!("test name")),
            email: EmailAddress::new("user@praxia.test")
                .unwrap_or_else(|_| panic!("test email")),
            role,
            client_id: None,
        }
    }

    fn service(users: Vec<UserRecord>) -> CaseService {
        CaseService::new(
            Arc::new(FakeCaseRepository::default()),
            Arc::new(FakeDocumentRepository::default()),
            Arc::new(FakeUserRepository {
                users: users.into_iter().map(|record| (record.id, record)).collect(),
            }),
        )
    }

    fn title(value: &str) -> NonEmptyString {
        NonEmptyString::new(value).unwrap_or_else(|_| panic!("test title"))
    }

    #[tokio::test]
    async fn create_case_requires_create_permission() {
        let partner = user(Role::Partner);
        let paralegal = user(Role::Paralegal);
        let service = service(vec![partner.clone(), paralegal.clone()]);

        let result = service
            .create_case(
                &paralegal.actor(),
                CreateCaseInput {
                    title: title("Harmon v. Calloway"),
                    owner: partner.id,
                    client_id: ClientId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn create_case_rejects_non_partner_owner() {
        let partner = user(Role::Partner);
        let junior = user(Role::JuniorAssociate);
        let service = service(vec![partner.clone(), junior.clone()]);

        let result = service
            .create_case(
                &partner.actor(),
                CreateCaseInput {
                    title: title("Harmon v. Calloway"),
                    owner: junior.id,
                    client_id: ClientId::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn assigned_collaborator_reads_case_while_outsider_is_denied() {
        let partner = user(Role::Partner);
        let collaborator = user(Role::JuniorAssociate);
        let outsider = user(Role::JuniorAssociate);
        let service = service(vec![partner.clone(), collaborator.clone(), outsider.clone()]);

        let case = service
            .create_case(
                &partner.actor(),
                CreateCaseInput {
                    title: title("Harmon v. Calloway"),
                    owner: partner.id,
                    client_id: ClientId::new(),
                },
            )
            .await
            .unwrap_or_else(|_| panic!("create case"));
        let case = service
            .add_collaborator(&partner.actor(), case.id, collaborator.id)
            .await
            .unwrap_or_else(|_| panic!("add collaborator"));

        assert!(service.case(&collaborator.actor(), case.id).await.is_ok());
        assert!(matches!(
            service.case(&outsider.actor(), case.id).await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn add_collaborator_rejects_client_users() {
        let partner = user(Role::Partner);
        let client_user = user(Role::Client);
        let service = service(vec![partner.clone(), client_user.clone()]);

        let case = service
            .create_case(
                &partner.actor(),
                CreateCaseInput {
                    title: title("Harmon v. Calloway"),
                    owner: partner.id,
                    client_id: ClientId::new(),
                },
            )
            .await
            .unwrap_or_else(|_| panic!("create case"));

        let result = service
            .add_collaborator(&partner.actor(), case.id, client_user.id)
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn partner_is_denied_confidential_documents() {
        let partner = user(Role::Partner);
        let admin = user(Role::Administrator);
        let service = service(vec![partner.clone(), admin.clone()]);

        let case = service
            .create_case(
                &partner.actor(),
                CreateCaseInput {
                    title: title("Harmon v. Calloway"),
                    owner: partner.id,
                    client_id: ClientId::new(),
                },
            )
            .await
            .unwrap_or_else(|_| panic!("create case"));
        let document = service
            .attach_document(
                &partner.actor(),
                case.id,
                AttachDocumentInput {
                    title: title("Settlement Draft"),
                    confidential: true,
                },
            )
            .await
            .unwrap_or_else(|_| panic!("attach document"));

        assert!(matches!(
            service.document(&partner.actor(), document.id).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(service.document(&admin.actor(), document.id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_case_is_not_found() {
        let partner = user(Role::Partner);
        let service = service(vec![partner.clone()]);

        let result = service.case(&partner.actor(), CaseId::new()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
