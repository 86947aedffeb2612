use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::models::DashboardState;
use crate::error::ErrorResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Current dashboard snapshot
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardState> {
    Json(state.dashboard_service.snapshot().await)
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text city name, optionally "name,countryCode"
    pub city: String,
}

/// Replace the focus city and refresh. Focus-city failures come back inside
/// the snapshot as `last_error` rather than as an HTTP error.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    let city = request.city.trim();
    if city.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "city must not be empty".to_string(),
                code: Some("EMPTY_CITY"),
            }),
        )
            .into_response();
    }

    Json(state.dashboard_service.search(city).await).into_response()
}
