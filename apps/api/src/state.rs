//! Application state shared across request handlers.

use domain_users::InMemoryUserStore;

/// Shared application state.
///
/// Cloning is cheap: the store shares its backing map through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// User persistence collaborator
    pub store: InMemoryUserStore,
}
