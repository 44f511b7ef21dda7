//! Level listing and public level detail.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use sqlrange_models::{LevelDetailResponse, RangeError};

use crate::state::AppState;
use crate::status_for;

/// Create levels router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/levels/all", get(list_levels))
        .route("/levels/:id", get(get_level))
}

/// List level titles in play order.
pub async fn list_levels(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let titles = state.store.list_titles().map_err(|e| status_for(&e))?;
    Ok(Json(titles))
}

/// Get the public view of one level. The flag, setup script, and checker
/// stay server-side; only the template segments are shown.
pub async fn get_level(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LevelDetailResponse>, StatusCode> {
    let level = state
        .store
        .get_level(id)
        .map_err(|e| status_for(&e))?
        .ok_or_else(|| status_for(&RangeError::LevelNotFound { id }))?;
    Ok(Json(LevelDetailResponse::from(&level)))
}
