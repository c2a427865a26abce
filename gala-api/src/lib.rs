use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod error;
pub mod site;
pub mod state;
pub mod tickets;

pub use state::AppState;

/// Router for the JSON endpoints plus the web bundle.
/// Unknown paths fall back to `index.html` so the page owns its routing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let index = state.static_dir.join("index.html");
    let bundle = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .merge(site::routes())
        .merge(tickets::routes())
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
