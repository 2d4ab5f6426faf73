//! User records and the per-request actor projection.

use praxia_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ClientId;
use crate::role::Role;

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Structural validation only: non-empty, exactly one `@`, non-empty
    /// local part, domain containing at least one `.`, at most 254
    /// characters. The value is trimmed and lowercased, so equality is
    /// insensitive to input casing.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let normalized = value.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain '@'".to_owned(),
            ));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@' with a local part".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if normalized.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// A user account as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user identifier.
    pub id: UserId,
    /// Name shown in listings and audit trails.
    pub display_name: NonEmptyString,
    /// Login email address.
    pub email: EmailAddress,
    /// Role determining the base permission set.
    pub role: Role,
    /// Client record this account is linked to; set for `Client`-role
    /// users and used by the case ownership check.
    pub client_id: Option<ClientId>,
}

impl UserRecord {
    /// Returns the per-request actor projection for this user.
    #[must_use]
    pub fn actor(&self) -> ActorIdentity {
        ActorIdentity::new(
            self.id,
            self.display_name.as_str(),
            self.role,
            self.client_id,
        )
    }
}

/// The acting user as resolved by the request boundary.
///
/// Carries exactly the attributes the decision functions consume; the
/// engine never loads data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    user_id: UserId,
    display_name: String,
    role: Role,
    client_id: Option<ClientId>,
}

impl ActorIdentity {
    /// Creates an actor identity from resolved user data.
    #[must_use]
    pub fn new(
        user_id: UserId,
        display_name: impl Into<String>,
        role: Role,
        client_id: Option<ClientId>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            role,
            client_id,
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name for the acting user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the actor's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the linked client record, if the actor is a client user.
    #[must_use]
    pub fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::EmailAddress;

    #[test]
    fn valid_email_is_accepted_and_normalized() {
        let email = EmailAddress::new("Counsel@Example.COM ");
        assert!(email.is_ok());
        assert_eq!(
            email.unwrap_or_else(|_| panic!("test")).as_str(),
            "counsel@example.com"
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(EmailAddress::new("noatsign").is_err());
    }

    #[test]
    fn email_with_two_ats_is_rejected() {
        assert!(EmailAddress::new("a@b@example.com").is_err());
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(EmailAddress::new("user@nodot").is_err());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(EmailAddress::new("  ").is_err());
    }
}
