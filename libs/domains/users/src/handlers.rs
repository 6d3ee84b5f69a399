use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::extractors::{UuidPath, ValidatedJson};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{
    DeleteResponse, LoginRequest, RegisterRequest, RegisterResponse, UpdateResponse,
    UpdateUserRequest, UserEnvelope, UsersListResponse, WelcomeResponse,
};
use crate::service::UserService;
use crate::store::UserStore;

/// Create the users router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Count and list of all users", body = UsersListResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> UserResult<Json<UsersListResponse>> {
    let all_users = service.list_users().await?;

    Ok(Json(UsersListResponse {
        total_user: all_users.len(),
        all_users,
    }))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    responses(
        (status = 200, description = "The requested user", body = UserEnvelope),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<UserEnvelope>> {
    let user = service.get_user(id).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let new_user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { new_user })))
}

/// Authenticate a user
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Welcome message (under the `error` key)", body = WelcomeResponse),
        (status = 400, description = "Missing fields or wrong password"),
        (status = 404, description = "Unknown email"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<WelcomeResponse>> {
    service.login(input).await?;

    // The success message travels under the `error` key; see WelcomeResponse.
    Ok(Json(WelcomeResponse {
        error: "Bienvenido!".to_string(),
    }))
}

/// Update a user (full replace of username, email and password)
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "users",
    request_body = UpdateUserRequest,
    responses(
        (status = 201, description = "User updated", body = UpdateResponse),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> UserResult<impl IntoResponse> {
    let update_user = service.update_user(id, input).await?;
    Ok((StatusCode::CREATED, Json(UpdateResponse { update_user })))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "users",
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<DeleteResponse>> {
    service.delete_user(id).await?;

    Ok(Json(DeleteResponse {
        msg: "Usuario borrado".to_string(),
    }))
}
