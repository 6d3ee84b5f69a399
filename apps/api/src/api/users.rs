use axum::Router;
use domain_users::{UserService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = UserService::new(state.store.clone());
    handlers::router(service)
}
