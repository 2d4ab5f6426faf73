use std::collections::BTreeSet;

use praxia_core::NonEmptyString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ClientId;
use crate::user::UserId;

/// Unique identifier for a case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(Uuid);

impl CaseId {
    /// Creates a new random case identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a case identifier from an existing UUID value.
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

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A case as loaded from storage.
///
/// The engine reads assignment data from this record; it never owns or
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Stable case identifier.
    pub id: CaseId,
    /// Case title shown in listings.
    pub title: NonEmptyString,
    /// Owning partner.
    pub owner: UserId,
    /// Staff assigned to work the case alongside the owner.
    pub collaborators: BTreeSet<UserId>,
    /// Client the case is conducted for.
    pub client_id: ClientId,
}

impl CaseRecord {
    /// Returns whether the user owns the case or is assigned to it.
    #[must_use]
    pub fn is_assigned(&self, user_id: UserId) -> bool {
        self.owner == user_id || self.collaborators.contains(&user_id)
    }
}
