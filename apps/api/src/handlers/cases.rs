use super::*;

use praxia_application::{AttachDocumentInput, CreateCaseInput};
use praxia_core::NonEmptyString;
use praxia_domain::{CaseId, ClientId, DocumentId, UserId};

pub async fn list_cases_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
) -> ApiResult<Json<Vec<CaseResponse>>> {
    let cases = state
        .case_service
        .list_cases(&actor)
        .await?
        .into_iter()
        .map(CaseResponse::from)
        .collect();

    Ok(Json(cases))
}

pub async fn create_case_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<CreateCaseRequest>,
) -> ApiResult<(StatusCode, Json<CaseResponse>)> {
    let input = CreateCaseInput {
        title: NonEmptyString::new(payload.title)?,
        owner: UserId::from_uuid(parse_id(payload.owner_id.as_str(), "owner")?),
        client_id: ClientId::from_uuid(parse_id(payload.client_id.as_str(), "client")?),
    };

    let case = state.case_service.create_case(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(CaseResponse::from(case))))
}

pub async fn get_case_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(case_id): Path<Uuid>,
) -> ApiResult<Json<CaseResponse>> {
    let case = state
        .case_service
        .case(&actor, CaseId::from_uuid(case_id))
        .await?;

    Ok(Json(CaseResponse::from(case)))
}

pub async fn add_collaborator_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(case_id): Path<Uuid>,
    Json(payload): Json<AddCollaboratorRequest>,
) -> ApiResult<Json<CaseResponse>> {
    let user_id = UserId::from_uuid(parse_id(payload.user_id.as_str(), "user")?);
    let case = state
        .case_service
        .add_collaborator(&actor, CaseId::from_uuid(case_id), user_id)
        .await?;

    Ok(Json(CaseResponse::from(case)))
}

pub async fn list_documents_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(case_id): Path<Uuid>,
) -> ApiResult<Json<Vec<DocumentResponse>>> {
    let documents = state
        .case_service
        .list_documents(&actor, CaseId::from_uuid(case_id))
        .await?
        .into_iter()
        .map(DocumentResponse::from)
        .collect();

    Ok(Json(documents))
}

pub async fn attach_document_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(case_id): Path<Uuid>,
    Json(payload): Json<AttachDocumentRequest>,
) -> ApiResult<(StatusCode, Json<DocumentResponse>)> {
    let input = AttachDocumentInput {
        title: NonEmptyString::new(payload.title)?,
        confidential: payload.confidential,
    };

    let document = state
        .case_service
        .attach_document(&actor, CaseId::from_uuid(case_id), input)
        .await?;

    Ok((StatusCode::CREATED, Json(DocumentResponse::from(document))))
}

pub async fn get_document_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(document_id): Path<Uuid>,
) -> ApiResult<Json<DocumentResponse>> {
    let document = state
        .case_service
        .document(&actor, DocumentId::from_uuid(document_id))
        .await?;

    Ok(Json(DocumentResponse::from(document)))
}

pub async fn remove_document_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(document_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .case_service
        .remove_document(&actor, DocumentId::from_uuid(document_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
