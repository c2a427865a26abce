use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use gala_catalog::TicketOffering;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/tickets", get(list_tickets))
        .route("/v1/tickets/{id}", get(get_ticket))
}

/// GET /v1/tickets
async fn list_tickets(State(state): State<AppState>) -> Json<Vec<TicketOffering>> {
    Json(state.catalog.offerings().to_vec())
}

/// GET /v1/tickets/{id}
async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TicketOffering>, AppError> {
    let offering = state
        .catalog
        .find_by_id(&id)
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    Ok(Json(offering.clone()))
}
