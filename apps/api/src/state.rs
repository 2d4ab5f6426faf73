use std::sync::Arc;

use praxia_application::{
    CalendarService, CaseService, ClientService, UserAdminService, UserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub case_service: CaseService,
    pub client_service: ClientService,
    pub calendar_service: CalendarService,
    pub user_admin_service: UserAdminService,
    pub user_repository: Arc<dyn UserRepository>,
}
