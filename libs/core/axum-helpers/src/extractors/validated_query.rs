//! Query string extractor with typed coercion and validation.

use crate::errors::{AppError, validation_messages};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// The query string is deserialized into `T`, so numeric parameters get
/// typed coercion instead of stringly comparisons. A parameter that cannot
/// be parsed (e.g. `minPrice=cheap`) is rejected with a 400 validation
/// envelope rather than silently matching nothing.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     limit: Option<u32>,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(vec![e.body_text()]).into_response())?;

        value
            .validate()
            .map_err(|e| AppError::Validation(validation_messages(&e)).into_response())?;

        Ok(ValidatedQuery(value))
    }
}
