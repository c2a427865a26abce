use axum::{extract::State, routing::get, Json, Router};
use gala_core::SiteSettings;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/site", get(get_site))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /v1/site
/// Event details and payment widget settings for the page
async fn get_site(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.site.as_ref().clone())
}
