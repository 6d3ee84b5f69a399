use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, RegisterRequest, UpdateUserRequest, User};
use crate::store::UserStore;

/// Business logic for user management.
///
/// Holds an explicit reference to its [`UserStore`] dependency; no global
/// wiring. Passwords are hashed with Argon2id before they reach the store
/// and verified here during login.
#[derive(Clone)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// All users. An empty collection is a valid result, not an error.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.store.find_all().await
    }

    /// Get a user by id.
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.store
            .find_one(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Register a new user.
    ///
    /// All three fields must be present and non-empty. The store enforces
    /// email uniqueness atomically with the insert.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        let username = required(input.username)?;
        let email = required(input.email)?;
        let password = required(input.password)?;

        let password_hash = self.hash_password(&password)?;

        self.store
            .create(User::new(username, email, password_hash))
            .await
    }

    /// Authenticate by email and password.
    ///
    /// An unknown email and a wrong password are distinct failures:
    /// [`UserError::UnknownEmail`] and [`UserError::InvalidCredentials`].
    pub async fn login(&self, input: LoginRequest) -> UserResult<User> {
        let email = required(input.email)?;
        let password = required(input.password)?;

        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(UserError::UnknownEmail)?;

        if !self.compare_password(&email, &password).await? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// True iff a user with that email exists and the candidate password
    /// verifies against its stored hash.
    pub async fn compare_password(&self, email: &str, candidate: &str) -> UserResult<bool> {
        match self.store.find_by_email(email).await? {
            Some(user) => self.verify_password(candidate, &user.password_hash),
            None => Ok(false),
        }
    }

    /// Full replace of username, email and password for an existing user.
    pub async fn update_user(&self, id: Uuid, input: UpdateUserRequest) -> UserResult<User> {
        let username = required(input.username)?;
        let email = required(input.email)?;
        let password = required(input.password)?;

        let mut user = self
            .store
            .find_one(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let password_hash = self.hash_password(&password)?;
        user.apply_update(username, email, password_hash);

        self.store.update(user).await
    }

    /// Delete a user by id.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let removed = self.store.remove(id).await?;

        if !removed {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Presence check: `None` and the empty string are both "missing".
fn required(field: Option<String>) -> UserResult<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(UserError::MissingValues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;

    fn service() -> UserService<InMemoryUserStore> {
        UserService::new(InMemoryUserStore::new())
    }

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let service = service();

        let user = service
            .register(register_request("ana", "a@x.com", "p1"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "p1");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn register_rejects_missing_and_empty_fields() {
        let service = service();

        let mut input = register_request("ana", "a@x.com", "p1");
        input.password = None;
        assert!(matches!(
            service.register(input).await,
            Err(UserError::MissingValues)
        ));

        let mut input = register_request("ana", "a@x.com", "p1");
        input.username = Some(String::new());
        assert!(matches!(
            service.register(input).await,
            Err(UserError::MissingValues)
        ));
    }

    #[tokio::test]
    async fn register_rejects_a_duplicate_email() {
        let service = service();
        service
            .register(register_request("ana", "a@x.com", "p1"))
            .await
            .unwrap();

        let result = service
            .register(register_request("otra", "a@x.com", "p2"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn login_distinguishes_unknown_email_from_bad_password() {
        let service = service();
        service
            .register(register_request("ana", "a@x.com", "p1"))
            .await
            .unwrap();

        let ok = service
            .login(LoginRequest {
                email: Some("a@x.com".to_string()),
                password: Some("p1".to_string()),
            })
            .await;
        assert_eq!(ok.unwrap().username, "ana");

        let wrong_password = service
            .login(LoginRequest {
                email: Some("a@x.com".to_string()),
                password: Some("nope".to_string()),
            })
            .await;
        assert!(matches!(
            wrong_password,
            Err(UserError::InvalidCredentials)
        ));

        let unknown = service
            .login(LoginRequest {
                email: Some("b@x.com".to_string()),
                password: Some("p1".to_string()),
            })
            .await;
        assert!(matches!(unknown, Err(UserError::UnknownEmail)));
    }

    #[tokio::test]
    async fn compare_password_is_false_for_unknown_email() {
        let service = service();
        service
            .register(register_request("ana", "a@x.com", "p1"))
            .await
            .unwrap();

        assert!(service.compare_password("a@x.com", "p1").await.unwrap());
        assert!(!service.compare_password("a@x.com", "p2").await.unwrap());
        assert!(!service.compare_password("b@x.com", "p1").await.unwrap());
    }

    #[tokio::test]
    async fn update_rehashes_the_password() {
        let service = service();
        let created = service
            .register(register_request("ana", "a@x.com", "p1"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    username: Some("anita".to_string()),
                    email: Some("anita@x.com".to_string()),
                    password: Some("p2".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "anita");
        assert_ne!(updated.password_hash, created.password_hash);
        assert!(service.compare_password("anita@x.com", "p2").await.unwrap());
    }

    #[tokio::test]
    async fn delete_of_an_unknown_id_is_not_found() {
        let service = service();

        let result = service.delete_user(Uuid::now_v7()).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
