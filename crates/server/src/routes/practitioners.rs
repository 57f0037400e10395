//! Practitioner listing handler

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use meddir_core::{Listing, codec, query};

use crate::directory::Directory;
use crate::error::AppError;

/// GET /api/practitioners - Search, filter, and sort the directory
///
/// The whole view is keyed by the query string: decode it, run the
/// pipeline, and hand back the results together with the canonical
/// shareable URL for this exact view.
pub async fn search(
    State(directory): State<Directory>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let practitioners = directory.practitioners()?;

    let params: codec::Params = raw.into_iter().collect();
    let state = codec::decode(&params);
    let results = query::apply(practitioners, &state);

    // Re-encoding the decoded state drops empty markers while leaving
    // keys the codec does not own in place.
    let self_url = listing_url(&codec::encode(&state, &params));

    Ok(Json(Listing::with_self_link(self_url, results)))
}

/// Render the listing path plus an encoded parameter set.
fn listing_url(params: &codec::Params) -> String {
    if params.is_empty() {
        return "/api/practitioners".to_string();
    }

    let query: String = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/api/practitioners?{}", query)
}

mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
