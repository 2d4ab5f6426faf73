use praxia_domain::CalendarEvent;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for scheduling an event.
///
/// Instants are RFC3339 strings, matching what the UI sends.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/schedule-event-request.ts"
)]
pub struct ScheduleEventRequest {
    pub assignee_id: String,
    pub title: String,
    pub starts_at: String,
    pub ends_at: String,
}

/// Incoming payload for rescheduling an event.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/update-event-request.ts"
)]
pub struct UpdateEventRequest {
    pub starts_at: String,
    pub ends_at: String,
}

/// Incoming payload for an availability pre-flight check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/availability-check-request.ts"
)]
pub struct AvailabilityCheckRequest {
    pub assignee_id: String,
    pub starts_at: String,
    pub ends_at: String,
    pub exclude_event_id: Option<String>,
}

/// API representation of a calendar event.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/event-response.ts"
)]
pub struct EventResponse {
    pub event_id: String,
    pub assignee_id: String,
    pub title: String,
    pub starts_at: String,
    pub ends_at: String,
    pub status: String,
}

/// Overlapping commitments blocking a proposal.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/schedule-conflict-response.ts"
)]
pub struct ScheduleConflictResponse {
    pub conflicts: Vec<EventResponse>,
}

impl From<CalendarEvent> for EventResponse {
    fn from(value: CalendarEvent) -> Self {
        Self {
            event_id: value.id().to_string(),
            assignee_id: value.assignee().to_string(),
            title: value.title().as_str().to_owned(),
            starts_at: value.starts_at().to_rfc3339(),
            ends_at: value.ends_at().to_rfc3339(),
            status: value.status().as_str().to_owned(),
        }
    }
}
