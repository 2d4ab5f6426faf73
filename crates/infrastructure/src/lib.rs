//! Reference repository implementations backing the application ports.
//!
//! Everything here is in-memory: the relational store is an external
//! collaborator, and these implementations exist for tests and the
//! development API. Durable conflict enforcement (identifier uniqueness,
//! per-assignee time-range exclusion) belongs to a production
//! repository.

#![forbid(unsafe_code)]

mod in_memory_audit_repository;
mod in_memory_calendar_repository;
mod in_memory_case_repository;
mod in_memory_client_repository;
mod in_memory_document_repository;
mod in_memory_user_repository;

pub use in_memory_audit_repository::InMemoryAuditRepository;
pub use in_memory_calendar_repository::InMemoryCalendarRepository;
pub use in_memory_case_repository::InMemoryCaseRepository;
pub use in_memory_client_repository::InMemoryClientRepository;
pub use in_memory_document_repository::InMemoryDocumentRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
