use std::collections::HashMap;

use async_trait::async_trait;
use praxia_application::UserRepository;
use praxia_core::{AppError, AppResult};
use praxia_domain::{Role, UserId, UserRecord};
use tokio::sync::RwLock;

/// In-memory user repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save_user(&self, user: UserRecord) -> AppResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(AppError::Conflict(format!(
                "user '{}' already exists",
                user.id
            )));
        }

        users.insert(user.id, user);
        Ok(())
    }

    async fn find_user(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let users = self.users.read().await;

        let mut values: Vec<UserRecord> = users.values().cloned().collect();
        values.sort_by(|left, right| {
            left.display_name
                .as_str()
                .cmp(right.display_name.as_str())
        });

        Ok(values)
    }

    async fn update_role(&self, user_id: UserId, role: Role) -> AppResult<()> {
        let mut users = self.users.write().await;

        match users.get_mut(&user_id) {
            Some(user) => {
                user.role = role;
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "user '{user_id}' does not exist"
            ))),
        }
    }
}
