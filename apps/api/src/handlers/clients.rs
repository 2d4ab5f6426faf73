use super::*;

use praxia_application::ClientInput;
use praxia_core::NonEmptyString;
use praxia_domain::{ClientId, ClientIdentity, EmailAddress};

fn client_input(payload: ClientRequest) -> Result<ClientInput, AppError> {
    Ok(ClientInput {
        display_name: NonEmptyString::new(payload.display_name)?,
        identity: identity_fields(payload.email, payload.phone, payload.tax_id)?,
    })
}

fn identity_fields(
    email: Option<String>,
    phone: Option<String>,
    tax_id: Option<String>,
) -> Result<ClientIdentity, AppError> {
    Ok(ClientIdentity {
        email: email.map(EmailAddress::new).transpose()?,
        phone: phone.map(NonEmptyString::new).transpose()?,
        tax_id: tax_id.map(NonEmptyString::new).transpose()?,
    })
}

pub async fn list_clients_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
) -> ApiResult<Json<Vec<ClientResponse>>> {
    let clients = state
        .client_service
        .list_clients(&actor)
        .await?
        .into_iter()
        .map(ClientResponse::from)
        .collect();

    Ok(Json(clients))
}

pub async fn register_client_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<ClientRequest>,
) -> ApiResult<(StatusCode, Json<ClientRegistrationResponse>)> {
    let registration = state
        .client_service
        .register_client(&actor, client_input(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClientRegistrationResponse {
            client: ClientResponse::from(registration.client),
            conflicts: registration
                .conflicts
                .into_iter()
                .map(ClientConflictResponse::from)
                .collect(),
        }),
    ))
}

pub async fn get_client_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(client_id): Path<Uuid>,
) -> ApiResult<Json<ClientResponse>> {
    let client = state
        .client_service
        .client(&actor, ClientId::from_uuid(client_id))
        .await?;

    Ok(Json(ClientResponse::from(client)))
}

pub async fn update_client_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(client_id): Path<Uuid>,
    Json(payload): Json<ClientRequest>,
) -> ApiResult<Json<ClientRegistrationResponse>> {
    let registration = state
        .client_service
        .update_client(&actor, ClientId::from_uuid(client_id), client_input(payload)?)
        .await?;

    Ok(Json(ClientRegistrationResponse {
        client: ClientResponse::from(registration.client),
        conflicts: registration
            .conflicts
            .into_iter()
            .map(ClientConflictResponse::from)
            .collect(),
    }))
}

pub async fn check_conflicts_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<ConflictCheckRequest>,
) -> ApiResult<Json<Vec<ClientConflictResponse>>> {
    let candidate = identity_fields(payload.email, payload.phone, payload.tax_id)?;
    let exclude_id = payload
        .exclude_client_id
        .map(|value| parse_id(value.as_str(), "client").map(ClientId::from_uuid))
        .transpose()?;

    let conflicts = state
        .client_service
        .check_conflicts(&actor, &candidate, exclude_id)
        .await?
        .into_iter()
        .map(ClientConflictResponse::from)
        .collect();

    Ok(Json(conflicts))
}

pub async fn archive_client_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(client_id): Path<Uuid>,
) -> ApiResult<Json<ClientResponse>> {
    let client = state
        .client_service
        .archive_client(&actor, ClientId::from_uuid(client_id))
        .await?;

    Ok(Json(ClientResponse::from(client)))
}
