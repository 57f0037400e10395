//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meddir_core::ApiOutcome;

/// Application error type
#[allow(dead_code)]
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unavailable(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, outcome) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiOutcome::bad_request(&msg)),
            AppError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ApiOutcome::unavailable(&msg))
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ApiOutcome::internal(&msg))
            }
        };

        (status, Json(outcome)).into_response()
    }
}
