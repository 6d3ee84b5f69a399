use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::ErrorResponse;
use thiserror::Error;
use uuid::Uuid;

/// Domain errors with a single error-kind-to-status mapping.
///
/// Every endpoint reports the same HTTP status for the same kind of failure:
/// missing or invalid input is 400, an absent record is 404, anything
/// infrastructure-shaped is 500.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("No se encontro el usuario con id {0}")]
    NotFound(Uuid),

    #[error("El email ya se encuentra registrado..")]
    DuplicateEmail(String),

    #[error("Favor de ingresar todos los valores requeridos..")]
    MissingValues,

    #[error("Error login!")]
    UnknownEmail,

    #[error("Error login!")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::NotFound(_) | UserError::UnknownEmail => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            UserError::DuplicateEmail(email) => {
                tracing::debug!(email = %email, "Registration rejected: email already taken");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            UserError::MissingValues | UserError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            UserError::PasswordHash(msg) | UserError::Internal(msg) => {
                // Internals are logged, never serialized into the response.
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_uniform() {
        let cases = [
            (UserError::NotFound(Uuid::now_v7()), StatusCode::NOT_FOUND),
            (UserError::UnknownEmail, StatusCode::NOT_FOUND),
            (
                UserError::DuplicateEmail("a@x.com".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (UserError::MissingValues, StatusCode::BAD_REQUEST),
            (UserError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (
                UserError::Internal("db down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let response = UserError::Internal("connection refused at 10.0.0.1".to_string());
        assert_eq!(
            response.to_string(),
            "Internal error: connection refused at 10.0.0.1"
        );

        // The HTTP body carries a generic message only.
        let http = UserError::Internal("connection refused at 10.0.0.1".to_string());
        let body = http.into_response();
        assert_eq!(body.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
