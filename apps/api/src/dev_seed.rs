//! Development-only seed data for the in-memory repositories.
//!
//! Seeds one user per role under fixed identifiers so a developer can
//! exercise every authorization path by switching the `x-actor-id`
//! header, plus sample clients, a staffed case, documents, and calendar
//! events.

use praxia_application::{
    AttachDocumentInput, ClientInput, CreateCaseInput, ScheduleEventInput, UserRepository,
};
use praxia_core::{AppError, AppResult, NonEmptyString};
use praxia_domain::{
    ActorIdentity, ClientId, ClientIdentity, EmailAddress, Role, UserId, UserRecord,
};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

const DEV_SEED_ADMIN_ID: &str = "00000000-0000-4000-8000-000000000001";
const DEV_SEED_PARTNER_ID: &str = "00000000-0000-4000-8000-000000000002";
const DEV_SEED_SENIOR_ID: &str = "00000000-0000-4000-8000-000000000003";
const DEV_SEED_JUNIOR_ID: &str = "00000000-0000-4000-8000-000000000004";
const DEV_SEED_PARALEGAL_ID: &str = "00000000-0000-4000-8000-000000000005";
const DEV_SEED_CLIENT_USER_ID: &str = "00000000-0000-4000-8000-000000000006";
const DEV_SEED_GUEST_ID: &str = "00000000-0000-4000-8000-000000000007";

pub async fn run(state: &AppState) -> AppResult<()> {
    let admin = seed_user(
        state,
        DEV_SEED_ADMIN_ID,
        "Dana Whitfield",
        "admin@praxia.local",
        Role::Administrator,
        None,
    )
    .await?;
    let admin_actor = admin.actor();

    let harmon = seed_client(
        state,
        &admin_actor,
        "Harmon Estates",
        Some("contact@harmon-estates.test"),
        Some("555-0100"),
        Some("TAX-4471"),
    )
    .await?;
    seed_client(
        state,
        &admin_actor,
        "Calloway Shipping",
        Some("office@calloway-shipping.test"),
        Some("555-0188"),
        None,
    )
    .await?;

    let partner = seed_user(
        state,
        DEV_SEED_PARTNER_ID,
        "Miriam Osei",
        "partner@praxia.local",
        Role::Partner,
        None,
    )
    .await?;
    let senior = seed_user(
        state,
        DEV_SEED_SENIOR_ID,
        "Theo Lindqvist",
        "senior@praxia.local",
        Role::SeniorAssociate,
        None,
    )
    .await?;
    let junior = seed_user(
        state,
        DEV_SEED_JUNIOR_ID,
        "Priya Raman",
        "junior@praxia.local",
        Role::JuniorAssociate,
        None,
    )
    .await?;
    seed_user(
        state,
        DEV_SEED_PARALEGAL_ID,
        "Jonah Beck",
        "paralegal@praxia.local",
        Role::Paralegal,
        None,
    )
    .await?;
    seed_user(
        state,
        DEV_SEED_CLIENT_USER_ID,
        "Ruth Harmon",
        "client@praxia.local",
        Role::Client,
        Some(harmon),
    )
    .await?;
    seed_user(
        state,
        DEV_SEED_GUEST_ID,
        "Visiting Counsel",
        "guest@praxia.local",
        Role::Guest,
        None,
    )
    .await?;

    let case = state
        .case_service
        .create_case(
            &admin_actor,
            CreateCaseInput {
                title: NonEmptyString::new("Harmon v. Calloway")?,
                owner: partner.id,
                client_id: harmon,
            },
        )
        .await?;
    state
        .case_service
        .add_collaborator(&admin_actor, case.id, senior.id)
        .await?;
    state
        .case_service
        .add_collaborator(&admin_actor, case.id, junior.id)
        .await?;
    info!(case_id = %case.id, "seeded case");

    state
        .case_service
        .attach_document(
            &admin_actor,
            case.id,
            AttachDocumentInput {
                title: NonEmptyString::new("Engagement Letter")?,
                confidential: false,
            },
        )
        .await?;
    state
        .case_service
        .attach_document(
            &admin_actor,
            case.id,
            AttachDocumentInput {
                title: NonEmptyString::new("Settlement Strategy Memo")?,
                confidential: true,
            },
        )
        .await?;

    seed_event(
        state,
        &admin_actor,
        partner.id,
        "Client Intake: Harmon",
        "2025-02-03T09:00:00Z",
        "2025-02-03T10:00:00Z",
    )
    .await?;
    seed_event(
        state,
        &admin_actor,
        partner.id,
        "Deposition Prep",
        "2025-02-03T10:00:00Z",
        "2025-02-03T11:30:00Z",
    )
    .await?;
    seed_event(
        state,
        &admin_actor,
        senior.id,
        "Motion Drafting",
        "2025-02-03T09:30:00Z",
        "2025-02-03T12:00:00Z",
    )
    .await?;

    info!("development seed complete; use x-actor-id with one of the seeded user ids");
    Ok(())
}

async fn seed_user(
    state: &AppState,
    id: &str,
    display_name: &str,
    email: &str,
    role: Role,
    client_id: Option<ClientId>,
) -> AppResult<UserRecord> {
    let user = UserRecord {
        id: parse_seed_id(id)?,
        display_name: NonEmptyString::new(display_name)?,
        email: EmailAddress::new(email)?,
        role,
        client_id,
    };
    state.user_repository.save_user(user.clone()).await?;
    info!(user_id = %user.id, role = %user.role, "seeded user");

    Ok(user)
}

async fn seed_client(
    state: &AppState,
    actor: &ActorIdentity,
    display_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
    tax_id: Option<&str>,
) -> AppResult<ClientId> {
    let registration = state
        .client_service
        .register_client(
            actor,
            ClientInput {
                display_name: NonEmptyString::new(display_name)?,
                identity: ClientIdentity {
                    email: email.map(EmailAddress::new).transpose()?,
                    phone: phone.map(NonEmptyString::new).transpose()?,
                    tax_id: tax_id.map(NonEmptyString::new).transpose()?,
                },
            },
        )
        .await?;
    info!(client_id = %registration.client.id, "seeded client");

    Ok(registration.client.id)
}

async fn seed_event(
    state: &AppState,
    actor: &ActorIdentity,
    assignee: UserId,
    title: &str,
    starts_at: &str,
    ends_at: &str,
) -> AppResult<()> {
    let outcome = state
        .calendar_service
        .schedule(
            actor,
            ScheduleEventInput {
                assignee,
                title: NonEmptyString::new(title)?,
                starts_at: parse_seed_instant(starts_at)?,
                ends_at: parse_seed_instant(ends_at)?,
            },
        )
        .await?;

    match outcome {
        praxia_application::ScheduleOutcome::Scheduled(event) => {
            info!(event_id = %event.id(), assignee = %assignee, "seeded event");
            Ok(())
        }
        praxia_application::ScheduleOutcome::Conflicts(_) => Err(AppError::Internal(
            "seed events must not double-book".to_owned(),
        )),
    }
}

fn parse_seed_id(value: &str) -> AppResult<UserId> {
    Uuid::parse_str(value)
        .map(UserId::from_uuid)
        .map_err(|error| AppError::Internal(format!("invalid seed id '{value}': {error}")))
}

fn parse_seed_instant(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|error| AppError::Internal(format!("invalid seed instant '{value}': {error}")))
}
