use praxia_core::NonEmptyString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::case::CaseId;

/// Unique identifier for a document record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new random document identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a document identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Document metadata as loaded from storage.
///
/// File content lives in external storage; the engine only reads the
/// confidentiality flag and the owning case reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Stable document identifier.
    pub id: DocumentId,
    /// Case the document belongs to.
    pub case_id: CaseId,
    /// Document title shown in listings.
    pub title: NonEmptyString,
    /// Excludes the document from partner blanket access when set.
    pub confidential: bool,
}
