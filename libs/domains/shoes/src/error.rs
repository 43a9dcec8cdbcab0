use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ShoeError {
    #[error("Shoe not found: {0}")]
    NotFound(Uuid),

    #[error("ID in URL and body must match")]
    IdMismatch,

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ShoeResult<T> = Result<T, ShoeError>;

/// Convert ShoeError to AppError for standardized error responses
impl From<ShoeError> for AppError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::NotFound(_) => AppError::NotFound("Shoe not found".to_string()),
            ShoeError::IdMismatch => {
                AppError::BadRequest("ID in URL and body must match".to_string())
            }
            ShoeError::Validation(errors) => AppError::Validation(errors),
            ShoeError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ShoeError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
