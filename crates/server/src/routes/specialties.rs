//! Specialty catalog handler

use axum::{Json, extract::State, response::IntoResponse};
use meddir_core::specialties;

use crate::directory::Directory;
use crate::error::AppError;

/// GET /api/specialties - All filterable specialties for the filter panel
pub async fn get(State(directory): State<Directory>) -> Result<impl IntoResponse, AppError> {
    let practitioners = directory.practitioners()?;
    Ok(Json(specialties::catalog(practitioners)))
}
