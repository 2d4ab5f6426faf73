use super::*;

use praxia_application::RegisterUserInput;
use praxia_core::NonEmptyString;
use praxia_domain::{ClientId, EmailAddress, Role, UserId};

pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_admin_service
        .list_users(&actor)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn register_user_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let client_id = payload
        .client_id
        .map(|value| parse_id(value.as_str(), "client").map(ClientId::from_uuid))
        .transpose()?;
    let input = RegisterUserInput {
        display_name: NonEmptyString::new(payload.display_name)?,
        email: EmailAddress::new(payload.email)?,
        role: Role::from_transport(payload.role.as_str())?,
        client_id,
    };

    let user = state.user_admin_service.register_user(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn change_role_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ChangeRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_admin_service
        .change_role(
            &actor,
            UserId::from_uuid(user_id),
            Role::from_transport(payload.role.as_str())?,
        )
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn assignable_roles_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
) -> ApiResult<Json<AssignableRolesResponse>> {
    let roles = state.user_admin_service.assignable_roles(&actor);

    Ok(Json(AssignableRolesResponse::from(roles)))
}
