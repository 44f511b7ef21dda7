//! Health endpoint.

use axum::{response::Json, routing::get, Router};
use serde_json::Value;

use crate::state::AppState;

/// Create health router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
