//! Flag verification endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

use sqlrange_engine::verify_flag;
use sqlrange_models::{RangeError, VerifyRequest, VerifyResponse};

use crate::state::AppState;
use crate::status_for;

/// Create verify router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/verify/:id", post(verify))
}

/// Check a submitted flag against a level's stored flag. Stateless,
/// byte-exact, no database beyond the catalog lookup.
pub async fn verify(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, StatusCode> {
    let level = state
        .store
        .get_level(id)
        .map_err(|e| status_for(&e))?
        .ok_or_else(|| status_for(&RangeError::LevelNotFound { id }))?;

    Ok(Json(VerifyResponse {
        correct: verify_flag(&level.flag, &body.maybe_flag),
    }))
}
