use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserStore;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let state = AppState {
        config,
        store: InMemoryUserStore::new(),
    };

    // Build router with API routes (pass reference, not ownership)
    let api_routes = api::routes(&state);

    // create_router adds docs and middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // /health: liveness check with app name and version
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Starting {} v{}",
        state.config.app.name, state.config.app.version
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("usuarios API shutdown complete");
    Ok(())
}
