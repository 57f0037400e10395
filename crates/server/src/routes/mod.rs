mod practitioners;
mod specialties;
mod suggestions;

pub mod health;
pub mod metrics;

use axum::{Router, routing::get};

use crate::directory::Directory;

/// Build directory API routes
pub fn api_routes() -> Router<Directory> {
    Router::new()
        .route("/practitioners", get(practitioners::search))
        .route("/suggestions", get(suggestions::get))
        .route("/specialties", get(specialties::get))
}
