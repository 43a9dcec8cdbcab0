pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response body.
///
/// Every error response carries this shape, providing consistent error
/// information to clients:
/// - `success`: always `false`
/// - `message`: human-readable error message
/// - `errors`: optional list of field-level problems (validation failures)
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "message": "Validation failed",
///   "errors": ["price: must be a non-negative number"]
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always false for error responses
    pub success: bool,
    /// Human-readable error message
    pub message: String,
    /// Field-level problems, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// The single mapping point from outcome classes to status codes and the
/// `{success: false, ...}` error envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => {
                tracing::info!("Validation failed: {:?}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody::with_errors("Validation failed", errors),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorBody::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorBody::new(msg))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                // Internal detail stays in the logs, never in the response
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens `validator` errors into "field: problem" strings.
///
/// Used by the validated extractors and by domain services so both produce
/// the same `errors` list in the validation envelope.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| {
                let problem = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{}: {}", field, problem)
            })
        })
        .collect();
    messages.sort();
    messages
}
