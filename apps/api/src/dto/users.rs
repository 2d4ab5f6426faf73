use praxia_domain::{Role, UserRecord};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for registering a user.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/register-user-request.ts"
)]
pub struct RegisterUserRequest {
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub client_id: Option<String>,
}

/// Incoming payload for a role change.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/change-role-request.ts"
)]
pub struct ChangeRoleRequest {
    pub role: String,
}

/// API representation of a user account.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub client_id: Option<String>,
}

/// Roles the acting user may assign to others.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/assignable-roles-response.ts"
)]
pub struct AssignableRolesResponse {
    pub roles: Vec<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(value: UserRecord) -> Self {
        Self {
            user_id: value.id.to_string(),
            display_name: value.display_name.into(),
            email: value.email.into(),
            role: value.role.as_str().to_owned(),
            client_id: value.client_id.map(|client_id| client_id.to_string()),
        }
    }
}

impl From<&'static [Role]> for AssignableRolesResponse {
    fn from(value: &'static [Role]) -> Self {
        Self {
            roles: value.iter().map(|role| role.as_str().to_owned()).collect(),
        }
    }
}
