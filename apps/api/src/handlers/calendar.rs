use super::*;

use chrono::{DateTime, Utc};
use praxia_application::{ScheduleEventInput, ScheduleOutcome};
use praxia_core::NonEmptyString;
use praxia_domain::{EventId, UserId};
use serde::Deserialize;

/// Query parameters for agenda listing.
#[derive(Debug, Deserialize)]
pub struct AgendaQuery {
    pub assignee: Uuid,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|error| AppError::Validation(format!("invalid instant '{value}': {error}")))
}

fn outcome_response(outcome: ScheduleOutcome, created: bool) -> Response {
    match outcome {
        ScheduleOutcome::Scheduled(event) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(EventResponse::from(event))).into_response()
        }
        ScheduleOutcome::Conflicts(conflicts) => (
            StatusCode::CONFLICT,
            Json(ScheduleConflictResponse {
                conflicts: conflicts.into_iter().map(EventResponse::from).collect(),
            }),
        )
            .into_response(),
    }
}

pub async fn agenda_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Query(query): Query<AgendaQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let events = state
        .calendar_service
        .agenda(&actor, UserId::from_uuid(query.assignee))
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(Json(events))
}

pub async fn schedule_event_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<ScheduleEventRequest>,
) -> ApiResult<Response> {
    let input = ScheduleEventInput {
        assignee: UserId::from_uuid(parse_id(payload.assignee_id.as_str(), "assignee")?),
        title: NonEmptyString::new(payload.title)?,
        starts_at: parse_instant(payload.starts_at.as_str())?,
        ends_at: parse_instant(payload.ends_at.as_str())?,
    };

    let outcome = state.calendar_service.schedule(&actor, input).await?;

    Ok(outcome_response(outcome, true))
}

pub async fn reschedule_event_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> ApiResult<Response> {
    let outcome = state
        .calendar_service
        .reschedule(
            &actor,
            EventId::from_uuid(event_id),
            parse_instant(payload.starts_at.as_str())?,
            parse_instant(payload.ends_at.as_str())?,
        )
        .await?;

    Ok(outcome_response(outcome, false))
}

pub async fn cancel_event_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<EventResponse>> {
    let event = state
        .calendar_service
        .cancel(&actor, EventId::from_uuid(event_id))
        .await?;

    Ok(Json(EventResponse::from(event)))
}

pub async fn check_availability_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorIdentity>,
    Json(payload): Json<AvailabilityCheckRequest>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let exclude_event_id = payload
        .exclude_event_id
        .map(|value| parse_id(value.as_str(), "event").map(EventId::from_uuid))
        .transpose()?;

    let overlaps = state
        .calendar_service
        .check_availability(
            &actor,
            UserId::from_uuid(parse_id(payload.assignee_id.as_str(), "assignee")?),
            parse_instant(payload.starts_at.as_str())?,
            parse_instant(payload.ends_at.as_str())?,
            exclude_event_id,
        )
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(Json(overlaps))
}
