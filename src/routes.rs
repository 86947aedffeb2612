use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard_handlers;
use crate::geo::handlers as geo_handlers;
use crate::AppState;

/// Build the dashboard API routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handlers::get_dashboard))
        .route("/search", post(dashboard_handlers::search))
}

/// Build the geocoding API routes
fn geo_routes() -> Router<AppState> {
    Router::new().route("/suggest", get(geo_handlers::suggest))
}

/// Build all API v1 routes
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(dashboard_routes()).merge(geo_routes())
}

/// Build the complete application router
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health check at root level
        .route("/", get(dashboard_handlers::health))
        .route("/health", get(dashboard_handlers::health))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
}
