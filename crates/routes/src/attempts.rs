//! Attempt execution endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

use sqlrange_engine::run_attempt;
use sqlrange_models::{AttemptRequest, AttemptResponse, RangeError};

use crate::state::AppState;
use crate::status_for;

/// Create attempts router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/attempt/:id", post(attempt))
}

/// Run one attempt against a level.
///
/// A failing merged statement is part of the game and comes back as a 200
/// with an `error` field; only unknown levels (404) and system faults
/// (500, opaque) use error statuses. The engine work is synchronous
/// (rusqlite), so it runs on the blocking pool.
pub async fn attempt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>, StatusCode> {
    let level = state
        .store
        .get_level(id)
        .map_err(|e| status_for(&e))?
        .ok_or_else(|| status_for(&RangeError::LevelNotFound { id }))?;

    let outcome = tokio::task::spawn_blocking(move || run_attempt(&level, &body.user_input))
        .await
        .map_err(|e| {
            status_for(&RangeError::Internal {
                reason: format!("attempt task for level {id} panicked: {e}"),
            })
        })?
        // Setup/provisioning faults are level-content bugs, not learner
        // mistakes; nothing of the detail reaches the client.
        .map_err(|e| status_for(&e))?;

    Ok(Json(AttemptResponse::from(outcome)))
}
