use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::dto::ValidationError;

pub mod auth;
pub mod catalog;
pub mod matrix;
pub mod reports;
pub mod risks;
pub mod users;

pub enum ServiceError {
    DatabaseError(String),
    BadRequest(String),
    Validation(ValidationError),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::DatabaseError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            ServiceError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ServiceError::Unauthorized(e) => (StatusCode::UNAUTHORIZED, e),
            ServiceError::Forbidden(e) => (StatusCode::FORBIDDEN, e),
            ServiceError::NotFound(e) => (StatusCode::NOT_FOUND, e),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::Validation(e)
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        // Opaque message to the client; the detail stays in the logs.
        ServiceError::DatabaseError("Database operation failed".to_string())
    }
}
