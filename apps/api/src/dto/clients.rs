use praxia_domain::{ClientConflict, ClientRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for registering or updating a client.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/client-request.ts"
)]
pub struct ClientRequest {
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
}

/// Incoming payload for a standalone conflict check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/conflict-check-request.ts"
)]
pub struct ConflictCheckRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub exclude_client_id: Option<String>,
}

/// API representation of a client.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/client-response.ts"
)]
pub struct ClientResponse {
    pub client_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub status: String,
}

/// One detected identifier collision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/client-conflict-response.ts"
)]
pub struct ClientConflictResponse {
    pub client: ClientResponse,
    pub matched_fields: Vec<String>,
}

/// A persisted client together with its advisory conflict list.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/client-registration-response.ts"
)]
pub struct ClientRegistrationResponse {
    pub client: ClientResponse,
    pub conflicts: Vec<ClientConflictResponse>,
}

impl From<ClientRecord> for ClientResponse {
    fn from(value: ClientRecord) -> Self {
        Self {
            client_id: value.id.to_string(),
            display_name: value.display_name.into(),
            email: value.identity.email.map(String::from),
            phone: value.identity.phone.map(String::from),
            tax_id: value.identity.tax_id.map(String::from),
            status: value.status.as_str().to_owned(),
        }
    }
}

impl From<ClientConflict> for ClientConflictResponse {
    fn from(value: ClientConflict) -> Self {
        Self {
            client: ClientResponse::from(value.client),
            matched_fields: value
                .matched_fields
                .into_iter()
                .map(|field| field.as_str().to_owned())
                .collect(),
        }
    }
}
