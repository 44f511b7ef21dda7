//! HTTP route handlers for the sqlrange challenge server.
//!
//! Handlers are organized by functional area and merged into one router;
//! CORS and request tracing apply to everything.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sqlrange_config::ServerConfig;
use sqlrange_models::RangeError;

pub mod attempts;
pub mod health;
pub mod levels;
pub mod state;
pub mod verify;

pub use state::AppState;

/// Create the main API router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(levels::create_router())
        .merge(attempts::create_router())
        .merge(verify::create_router())
        .merge(health::create_router())
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a domain error to its HTTP status.
///
/// System faults are logged here with their category and full detail; the
/// client sees only the opaque status, never the reason.
pub(crate) fn status_for(err: &RangeError) -> StatusCode {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(category = err.category(), "Request failed: {}", err);
    }
    status
}

/// CORS for the browser frontend: configured origins only, the two methods
/// the API actually serves, JSON bodies, credentials allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
