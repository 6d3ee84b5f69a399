//! # Axum Helpers
//!
//! Shared utilities for building the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: the `{ "error": ... }` response body and fallback handlers
//! - **[`extractors`]**: custom extractors (validated JSON, UUID path params)
//! - **[`server`]**: router/server setup, health route, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes)?
//!         .merge(health_router(app_info!()));
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::ErrorResponse;
pub use extractors::{UuidPath, ValidatedJson};
