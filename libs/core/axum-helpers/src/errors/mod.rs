//! Structured error bodies shared by every service in the workspace.

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaving an API in this workspace is JSON with an `error` key
/// carrying a human-readable message, optionally accompanied by structured
/// `details` (e.g. per-field validation errors).
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Favor de ingresar todos los valores requeridos..",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}
