use praxia_domain::{CaseRecord, DocumentRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for opening a case.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-case-request.ts"
)]
pub struct CreateCaseRequest {
    pub title: String,
    pub owner_id: String,
    pub client_id: String,
}

/// Incoming payload for assigning a collaborator.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/add-collaborator-request.ts"
)]
pub struct AddCollaboratorRequest {
    pub user_id: String,
}

/// Incoming payload for attaching a document.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/attach-document-request.ts"
)]
pub struct AttachDocumentRequest {
    pub title: String,
    pub confidential: bool,
}

/// API representation of a case.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/case-response.ts"
)]
pub struct CaseResponse {
    pub case_id: String,
    pub title: String,
    pub owner_id: String,
    pub collaborator_ids: Vec<String>,
    pub client_id: String,
}

/// API representation of a document.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/document-response.ts"
)]
pub struct DocumentResponse {
    pub document_id: String,
    pub case_id: String,
    pub title: String,
    pub confidential: bool,
}

impl From<CaseRecord> for CaseResponse {
    fn from(value: CaseRecord) -> Self {
        Self {
            case_id: value.id.to_string(),
            title: value.title.into(),
            owner_id: value.owner.to_string(),
            collaborator_ids: value
                .collaborators
                .into_iter()
                .map(|collaborator| collaborator.to_string())
                .collect(),
            client_id: value.client_id.to_string(),
        }
    }
}

impl From<DocumentRecord> for DocumentResponse {
    fn from(value: DocumentRecord) -> Self {
        Self {
            document_id: value.id.to_string(),
            case_id: value.case_id.to_string(),
            title: value.title.into(),
            confidential: value.confidential,
        }
    }
}
