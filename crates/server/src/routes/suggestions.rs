//! Search-box autocomplete handler

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use meddir_core::{codec, suggest};

use crate::directory::Directory;
use crate::error::AppError;

/// GET /api/suggestions - First name-matches for the in-progress term
pub async fn get(
    State(directory): State<Directory>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let practitioners = directory.practitioners()?;

    let term = params
        .get(codec::PARAM_SEARCH)
        .map(String::as_str)
        .unwrap_or_default();

    Ok(Json(suggest::suggest(practitioners, term)))
}
