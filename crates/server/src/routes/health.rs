//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::directory::Directory;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    practitioners: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Report directory load status
pub async fn check(State(directory): State<Directory>) -> impl IntoResponse {
    match &directory {
        Directory::Ready(list) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                practitioners: Some(list.len()),
                reason: None,
            }),
        ),
        Directory::Unavailable { reason } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                practitioners: None,
                reason: Some(reason.to_string()),
            }),
        ),
    }
}
