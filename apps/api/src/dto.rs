use serde::Serialize;
use ts_rs::TS;

mod calendar;
mod cases;
mod clients;
mod users;

pub use calendar::{
    AvailabilityCheckRequest, EventResponse, ScheduleConflictResponse, ScheduleEventRequest,
    UpdateEventRequest,
};
pub use cases::{
    AddCollaboratorRequest, AttachDocumentRequest, CaseResponse, CreateCaseRequest,
    DocumentResponse,
};
pub use clients::{
    ClientConflictResponse, ClientRegistrationResponse, ClientRequest, ClientResponse,
    ConflictCheckRequest,
};
pub use users::{
    AssignableRolesResponse, ChangeRoleRequest, RegisterUserRequest, UserResponse,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
