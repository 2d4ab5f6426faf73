use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use praxia_application::UserRepository;
use praxia_core::AppError;
use praxia_domain::UserId;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

/// Header carrying the acting user's identifier.
///
/// Session handling is an external collaborator; this boundary resolves
/// the header against the user repository and attaches the actor
/// projection the services consume.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

pub async fn resolve_actor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(ACTOR_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    let user_id = Uuid::parse_str(header)
        .map(UserId::from_uuid)
        .map_err(|_| AppError::Unauthorized("invalid actor identifier".to_owned()))?;

    let user = state
        .user_repository
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("unknown actor".to_owned()))?;

    request.extensions_mut().insert(user.actor());
    Ok(next.run(request).await)
}
