//! Route table.

use crate::AppState;
use crate::handlers::{fetch_asset, generate, health, manifest, update_prompt};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

/// Creates the bridge router.
///
/// CORS is fully open: the editor is served from a different local port.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/update_prompt", post(update_prompt))
        .route("/generate", post(generate))
        .route("/api/scorpion/manifest", get(manifest))
        .route("/api/scorpion/*path", get(fetch_asset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
