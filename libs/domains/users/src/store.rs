use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Persistence collaborator for [`User`] records.
///
/// Absence is not an error: lookups return `Ok(None)` (or `Ok(false)` for
/// [`remove`](UserStore::remove)) when no record matches. Only
/// infrastructure failures surface as `Err`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users; an empty vec is a valid result.
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Look up a user by id.
    async fn find_one(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Look up a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a new user. The duplicate-email check and the insert are a
    /// single atomic step; a conflicting email yields
    /// [`UserError::DuplicateEmail`].
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replace an existing user record. Unknown ids yield
    /// [`UserError::NotFound`]; changing the email to one held by another
    /// record yields [`UserError::DuplicateEmail`].
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by id. Returns `false` when the id was absent.
    async fn remove(&self, id: Uuid) -> UserResult<bool>;
}

/// In-memory implementation of [`UserStore`].
///
/// Mutations take the write lock for their whole read-check-write sequence,
/// which is what makes the email-uniqueness check atomic with the insert.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(all)
    }

    async fn find_one(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned();
        Ok(user)
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let email_taken = users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));

        if email_taken {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        let email_taken = users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email));

        if email_taken {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn remove(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
