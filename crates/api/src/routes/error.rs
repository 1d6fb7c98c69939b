//! Mapping from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mergington_domain::MergingtonError;
use serde::Serialize;
use tracing::error;

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// A domain error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub MergingtonError);

impl From<MergingtonError> for ApiError {
    fn from(value: MergingtonError) -> Self {
        Self(value)
    }
}

impl ApiError {
    /// Status code and client-facing detail for this error.
    ///
    /// Infrastructure failures get a generic detail; the real message is
    /// only logged.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match &self.0 {
            MergingtonError::NotFound { .. } => (StatusCode::NOT_FOUND, "Activity not found".into()),
            MergingtonError::AlreadyRegistered { .. } => {
                (StatusCode::BAD_REQUEST, "Student is already signed up".into())
            }
            MergingtonError::CapacityExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "Activity is full".into())
            }
            MergingtonError::NotRegistered { .. } => {
                (StatusCode::BAD_REQUEST, "Student is not signed up for this activity".into())
            }
            MergingtonError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
            MergingtonError::ConstraintViolation(message) => (StatusCode::CONFLICT, message.clone()),
            MergingtonError::Database(_)
            | MergingtonError::Config(_)
            | MergingtonError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}
