use axum::Router;

pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Returns a stateless Router: each sub-router has its state already applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(users::router(state))
}
