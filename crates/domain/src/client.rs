//! Client records and the conflict-of-interest matcher.

use praxia_core::{AppError, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::EmailAddress;

/// Unique identifier for a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Creates a new random client identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a client identifier from an existing UUID value.
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

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lifecycle status of a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    /// Represented client; participates in conflict matching.
    Active,
    /// Former client; excluded from conflict matching.
    Archived,
}

impl ClientStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    /// Parses a storage string into a status.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(AppError::Validation(format!(
                "unknown client status '{value}'"
            ))),
        }
    }
}

/// The identifier fields compared during conflict matching.
///
/// Each field is optional; a missing field never produces a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Contact email address.
    pub email: Option<EmailAddress>,
    /// Contact phone number.
    pub phone: Option<NonEmptyString>,
    /// National tax identifier.
    pub tax_id: Option<NonEmptyString>,
}

/// A client as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Stable client identifier.
    pub id: ClientId,
    /// Name shown in listings and conflict reports.
    pub display_name: NonEmptyString,
    /// Identifier fields used for conflict matching.
    pub identity: ClientIdentity,
    /// Lifecycle status.
    pub status: ClientStatus,
}

/// The identifier field on which two clients collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictField {
    /// Email addresses matched.
    Email,
    /// Phone numbers matched.
    Phone,
    /// Tax identifiers matched.
    TaxId,
}

impl ConflictField {
    /// Returns a stable storage value for this field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::TaxId => "tax_id",
        }
    }
}

/// A detected identifier collision with an existing client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConflict {
    /// The existing client the candidate collides with.
    pub client: ClientRecord,
    /// The fields that collided, in catalog order.
    pub matched_fields: Vec<ConflictField>,
}

/// Scans existing clients for identifier collisions with the candidate.
///
/// A record conflicts when any one candidate field is present and exactly
/// equals the record's corresponding field. Only active records
/// participate, and `exclude_id` removes the candidate's own prior
/// version during updates. Every match is returned; whether a match
/// blocks or merely warns is the caller's decision.
///
/// The scan is linear and is pre-flight only: durable enforcement
/// belongs to a uniqueness constraint at the persistence layer.
#[must_use]
pub fn find_conflicts(
    candidate: &ClientIdentity,
    existing: &[ClientRecord],
    exclude_id: Option<ClientId>,
) -> Vec<ClientConflict> {
    existing
        .iter()
        .filter(|record| record.status == ClientStatus::Active)
        .filter(|record| Some(record.id) != exclude_id)
        .filter_map(|record| {
            let matched_fields = matched_fields(candidate, &record.identity);
            if matched_fields.is_empty() {
                None
            } else {
                Some(ClientConflict {
                    client: record.clone(),
                    matched_fields,
                })
            }
        })
        .collect()
}

fn matched_fields(candidate: &ClientIdentity, existing: &ClientIdentity) -> Vec<ConflictField> {
    let mut fields = Vec::new();

    if field_matches(candidate.email.as_ref(), existing.email.as_ref()) {
        fields.push(ConflictField::Email);
    }
    if field_matches(candidate.phone.as_ref(), existing.phone.as_ref()) {
        fields.push(ConflictField::Phone);
    }
    if field_matches(candidate.tax_id.as_ref(), existing.tax_id.as_ref()) {
        fields.push(ConflictField::TaxId);
    }

    fields
}

fn field_matches<T: Eq>(candidate: Option<&T>, existing: Option<&T>) -> bool {
    match (candidate, existing) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
