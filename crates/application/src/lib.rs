//! Application services and ports.

#![forbid(unsafe_code)]

mod audit;
pub mod authorization;
mod calendar_service;
mod case_service;
mod client_service;
mod user_admin_service;

pub use audit::{AuditEvent, AuditRepository};
pub use calendar_service::{
    CalendarRepository, CalendarService, ScheduleEventInput, ScheduleOutcome,
};
pub use case_service::{
    AttachDocumentInput, CaseRepository, CaseService, CreateCaseInput, DocumentRepository,
};
pub use client_service::{ClientInput, ClientRegistration, ClientRepository, ClientService};
pub use user_admin_service::{RegisterUserInput, UserAdminService, UserRepository};
