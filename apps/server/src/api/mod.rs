//! HTTP API surface.

mod health;
mod pricing;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Assemble the API router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health::get_health))
        .route("/api/pricing", get(pricing::get_pricing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
