use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use praxia_core::AppError;
use praxia_domain::ActorIdentity;
use uuid::Uuid;

use crate::dto::{
    AddCollaboratorRequest, AssignableRolesResponse, AttachDocumentRequest,
    AvailabilityCheckRequest, CaseResponse, ChangeRoleRequest, ClientConflictResponse,
    ClientRegistrationResponse, ClientRequest, ClientResponse, ConflictCheckRequest,
    CreateCaseRequest, DocumentResponse, EventResponse, RegisterUserRequest,
    ScheduleConflictResponse, ScheduleEventRequest, UpdateEventRequest, UserResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub mod calendar;
pub mod cases;
pub mod clients;
pub mod health;
pub mod users;

fn parse_id(value: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::Validation(format!("invalid {what} identifier '{value}'")))
}
