mod cache;
mod config;
mod dashboard;
mod error;
mod forecast;
mod geo;
mod groups;
mod provider;
mod routes;
mod weather;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError};
use reqwest::Client;
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::dashboard::DashboardService;
use crate::forecast::ForecastService;
use crate::geo::{create_suggest_cache, start_cache_cleanup_task, SuggestService};
use crate::groups::GroupService;
use crate::provider::{OpenWeatherClient, Provider};
use crate::weather::WeatherService;

/// Shared HTTP client configuration
const HTTP_TIMEOUT_SECS: u64 = 30;
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dashboard_service: Arc<DashboardService>,
    pub suggest_service: Arc<SuggestService>,
}

/// Create shared HTTP client with connection pooling
fn create_http_client() -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10)
        .build()?;
    Ok(client)
}

/// Handle request timeout errors
async fn handle_timeout_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {}", err),
        )
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl+c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skydash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(default_city = %config.default_city, "Configuration loaded");

    // Shared HTTP client with connection pooling
    let http_client = create_http_client()?;

    // Provider and services
    let provider: Arc<dyn Provider> = Arc::new(OpenWeatherClient::new(
        http_client,
        &config.openweathermap_api_key,
        &config.units,
    ));
    let weather_service = Arc::new(WeatherService::new(provider.clone()));
    let forecast_service = Arc::new(ForecastService::new(provider.clone()));
    let group_service = Arc::new(GroupService::new(weather_service.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        weather_service,
        forecast_service,
        group_service,
        &config.default_city,
    ));

    // Suggestion cache with hourly cleanup
    let suggest_cache = create_suggest_cache();
    start_cache_cleanup_task(suggest_cache.clone());
    let suggest_service = Arc::new(SuggestService::new(
        provider,
        suggest_cache,
        config.suggest_limit,
    ));

    // Background refresh loop; the first tick is immediate and doubles as
    // the startup refresh of all panels
    let refresh_handle = dashboard_service
        .spawn_refresh_loop(Duration::from_secs(config.refresh_interval_secs));
    tracing::info!(
        interval_secs = config.refresh_interval_secs,
        "Background refresh loop started"
    );

    // Shared application state
    let state = AppState {
        config: Arc::new(config.clone()),
        dashboard_service,
        suggest_service,
    };

    // The dashboard is consumed by a browser page, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::build_router()
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(60)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server with graceful shutdown
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The interval task holds no state worth draining; cancel it outright
    refresh_handle.abort();

    tracing::info!("Server shutdown complete");

    Ok(())
}
