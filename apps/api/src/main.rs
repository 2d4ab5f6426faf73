//! Praxia API composition root.

#![forbid(unsafe_code)]

mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use praxia_application::{
    CalendarService, CaseService, ClientService, UserAdminService, UserRepository,
};
use praxia_core::AppError;
use praxia_infrastructure::{
    InMemoryAuditRepository, InMemoryCalendarRepository, InMemoryCaseRepository,
    InMemoryClientRepository, InMemoryDocumentRepository, InMemoryUserRepository,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let dev_seed = env::var("DEV_SEED")
        .unwrap_or_else(|_| "false".to_owned())
        .eq_ignore_ascii_case("true");

    let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let case_repository = Arc::new(InMemoryCaseRepository::new());
    let document_repository = Arc::new(InMemoryDocumentRepository::new());
    let client_repository = Arc::new(InMemoryClientRepository::new());
    let calendar_repository = Arc::new(InMemoryCalendarRepository::new());
    let audit_repository = Arc::new(InMemoryAuditRepository::new());

    let app_state = AppState {
        case_service: CaseService::new(
            case_repository,
            document_repository,
            user_repository.clone(),
        ),
        client_service: ClientService::new(client_repository),
        calendar_service: CalendarService::new(calendar_repository),
        user_admin_service: UserAdminService::new(user_repository.clone(), audit_repository),
        user_repository,
    };

    if dev_seed {
        dev_seed::run(&app_state).await?;
    }

    let protected_routes = Router::new()
        .route(
            "/api/cases",
            get(handlers::cases::list_cases_handler).post(handlers::cases::create_case_handler),
        )
        .route("/api/cases/{case_id}", get(handlers::cases::get_case_handler))
        .route(
            "/api/cases/{case_id}/collaborators",
            post(handlers::cases::add_collaborator_handler),
        )
        .route(
            "/api/cases/{case_id}/documents",
            get(handlers::cases::list_documents_handler)
                .post(handlers::cases::attach_document_handler),
        )
        .route(
            "/api/documents/{document_id}",
            get(handlers::cases::get_document_handler)
                .delete(handlers::cases::remove_document_handler),
        )
        .route(
            "/api/clients",
            get(handlers::clients::list_clients_handler)
                .post(handlers::clients::register_client_handler),
        )
        .route(
            "/api/clients/conflict-checks",
            post(handlers::clients::check_conflicts_handler),
        )
        .route(
            "/api/clients/{client_id}",
            get(handlers::clients::get_client_handler)
                .put(handlers::clients::update_client_handler),
        )
        .route(
            "/api/clients/{client_id}/archive",
            post(handlers::clients::archive_client_handler),
        )
        .route(
            "/api/calendar/events",
            get(handlers::calendar::agenda_handler)
                .post(handlers::calendar::schedule_event_handler),
        )
        .route(
            "/api/calendar/events/{event_id}",
            put(handlers::calendar::reschedule_event_handler),
        )
        .route(
            "/api/calendar/events/{event_id}/cancel",
            post(handlers::calendar::cancel_event_handler),
        )
        .route(
            "/api/calendar/availability-checks",
            post(handlers::calendar::check_availability_handler),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users_handler).post(handlers::users::register_user_handler),
        )
        .route(
            "/api/users/assignable-roles",
            get(handlers::users::assignable_roles_handler),
        )
        .route(
            "/api/users/{user_id}/role",
            put(handlers::users::change_role_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_actor,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(middleware::ACTOR_ID_HEADER),
        ]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "praxia-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
