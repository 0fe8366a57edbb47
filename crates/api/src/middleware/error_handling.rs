//! # Error Handling Middleware
//!
//! This module maps the salon domain errors onto HTTP status codes and JSON
//! error bodies so that every endpoint reports failures the same way:
//!
//! - `Validation` becomes `400 Bad Request`
//! - `NotFound` becomes `404 Not Found`
//! - `Storage` becomes `500 Internal Server Error` with a generic message; the
//!   underlying cause is logged, never returned to the caller

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salon_core::errors::SalonError;
use serde_json::json;

/// Message returned to callers for storage failures.
pub const GENERIC_ERROR_MESSAGE: &str = "Algo salió mal!";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use salon_api::middleware::error_handling::AppError;
/// use salon_core::errors::SalonError;
///
/// async fn handler(id: i64) -> Result<Json<i64>, AppError> {
///     if id < 0 {
///         return Err(AppError(SalonError::NotFound("Cita no encontrada".into())));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SalonError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SalonError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            SalonError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            SalonError::Storage(err) => {
                tracing::error!("Request failed with storage error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Automatic conversion from SalonError to AppError
///
/// Allows using `?` on store calls inside handlers returning `Result<T, AppError>`.
impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}

/// Malformed bodies (bad JSON, wrong field types, missing content type) are
/// validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(SalonError::Validation(rejection.body_text()))
    }
}

/// Path parameters that do not parse (e.g. `/citas/abc`) are validation failures.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(SalonError::Validation(rejection.body_text()))
    }
}

/// Maps a SalonError to an HTTP response
pub fn map_error(err: SalonError) -> Response {
    AppError(err).into_response()
}
