use std::collections::HashMap;

use async_trait::async_trait;
use praxia_application::DocumentRepository;
use praxia_core::{AppError, AppResult};
use praxia_domain::{CaseId, DocumentId, DocumentRecord};
use tokio::sync::RwLock;

/// In-memory document metadata repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, DocumentRecord>>,
}

impl InMemoryDocumentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save_document(&self, document: DocumentRecord) -> AppResult<()> {
        let mut documents = self.documents.write().await;

        if documents.contains_key(&document.id) {
            return Err(AppError::Conflict(format!(
                "document '{}' already exists",
                document.id
            )));
        }

        documents.insert(document.id, document);
        Ok(())
    }

    async fn find_document(&self, document_id: DocumentId) -> AppResult<Option<DocumentRecord>> {
        Ok(self.documents.read().await.get(&document_id).cloned())
    }

    async fn list_documents_for_case(&self, case_id: CaseId) -> AppResult<Vec<DocumentRecord>> {
        let documents = self.documents.read().await;

        let mut values: Vec<DocumentRecord> = documents
            .values()
            .filter(|document| document.case_id == case_id)
            .cloned()
            .collect();
        values.sort_by(|left, right| left.title.as_str().cmp(right.title.as_str()));

        Ok(values)
    }

    async fn delete_document(&self, document_id: DocumentId) -> AppResult<()> {
        let mut documents = self.documents.write().await;

        if documents.remove(&document_id).is_none() {
            return Err(AppError::NotFound(format!(
                "document '{document_id}' does not exist"
            )));
        }

        Ok(())
    }
}
