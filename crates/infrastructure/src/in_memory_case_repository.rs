use std::collections::HashMap;

use async_trait::async_trait;
use praxia_application::CaseRepository;
use praxia_core::{AppError, AppResult};
use praxia_domain::{CaseId, CaseRecord};
use tokio::sync::RwLock;

/// In-memory case repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<HashMap<CaseId, CaseRecord>>,
}

impl InMemoryCaseRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn save_case(&self, case: CaseRecord) -> AppResult<()> {
        let mut cases = self.cases.write().await;

        if cases.contains_key(&case.id) {
            return Err(AppError::Conflict(format!(
                "case '{}' already exists",
                case.id
            )));
        }

        cases.insert(case.id, case);
        Ok(())
    }

    async fn update_case(&self, case: CaseRecord) -> AppResult<()> {
        let mut cases = self.cases.write().await;

        if !cases.contains_key(&case.id) {
            return Err(AppError::NotFound(format!(
                "case '{}' does not exist",
                case.id
            )));
        }

        cases.insert(case.id, case);
        Ok(())
    }

    async fn find_case(&self, case_id: CaseId) -> AppResult<Option<CaseRecord>> {
        Ok(self.cases.read().await.get(&case_id).cloned())
    }

    async fn list_cases(&self) -> AppResult<Vec<CaseRecord>> {
        let cases = self.cases.read().await;

        let mut values: Vec<CaseRecord> = cases.values().cloned().collect();
        values.sort_by(|left, right| left.title.as_str().cmp(right.title.as_str()));

        Ok(values)
    }
}
