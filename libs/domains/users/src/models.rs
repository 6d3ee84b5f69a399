use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,
    /// Display name; no uniqueness constraint
    pub username: String,
    /// Unique across all users, compared case-insensitively
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user (password must already be hashed by the service)
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of username, email and password hash. The id and
    /// creation timestamp never change.
    pub fn apply_update(&mut self, username: String, email: String, password_hash: String) {
        self.username = username;
        self.email = email;
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

/// Body of `POST /register`.
///
/// Fields are optional at the serde level; the service rejects absent or
/// empty values with a single "missing values" error, so a partial body is a
/// 400 rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /user/{id}`. Update is a full replace: all three fields are
/// required, exactly like registration.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response of `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub total_user: usize,
    #[serde(rename = "allUsers")]
    pub all_users: Vec<User>,
}

/// Response of `GET /user/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

/// Response of `POST /register`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[serde(rename = "newUser")]
    pub new_user: User,
}

/// Response of `POST /login`.
///
/// The welcome message is carried under the `error` key. That is the
/// published wire contract of this endpoint; renaming it would break
/// existing clients, so the quirk is kept deliberately.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub error: String,
}

/// Response of `PUT /user/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponse {
    #[serde(rename = "updateUser")]
    pub update_user: User,
}

/// Response of `DELETE /user/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User::new(
            "ana".to_string(),
            "a@x.com".to_string(),
            "$argon2id$fake".to_string(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "ana");
    }

    #[test]
    fn apply_update_replaces_fields_but_keeps_identity() {
        let mut user = User::new(
            "ana".to_string(),
            "a@x.com".to_string(),
            "hash1".to_string(),
        );
        let id = user.id;
        let created_at = user.created_at;

        user.apply_update(
            "anita".to_string(),
            "anita@x.com".to_string(),
            "hash2".to_string(),
        );

        assert_eq!(user.id, id);
        assert_eq!(user.created_at, created_at);
        assert_eq!(user.username, "anita");
        assert_eq!(user.email, "anita@x.com");
        assert_eq!(user.password_hash, "hash2");
    }

    #[test]
    fn list_response_uses_the_wire_field_names() {
        let response = UsersListResponse {
            total_user: 1,
            all_users: vec![User::new(
                "ana".to_string(),
                "a@x.com".to_string(),
                "hash".to_string(),
            )],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total_user"], 1);
        assert!(json["allUsers"].is_array());
    }
}
