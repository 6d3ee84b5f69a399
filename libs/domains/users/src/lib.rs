//! Users Domain
//!
//! User management for the usuarios API: registration, login, and CRUD over
//! user records.
//!
//! # Architecture
//!
//! Layered the same way as the other domains in this workspace:
//!
//! - `handlers` — HTTP endpoints and response envelopes
//! - `service` — business logic: field presence checks, Argon2 password
//!   hashing and verification, not-found mapping
//! - `store` — persistence behind the [`UserStore`] trait
//! - `models` — entity and DTOs
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserStore, UserService, handlers};
//!
//! let store = InMemoryUserStore::new();
//! let service = UserService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{LoginRequest, RegisterRequest, UpdateUserRequest, User};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
