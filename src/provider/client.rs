use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{Client, Response};
use thiserror::Error;

use super::models::*;
use crate::error::HttpError;
use crate::impl_into_response;

const CURRENT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_API_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const GEOCODING_API_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to fetch weather data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl HttpError for ProviderError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CityNotFound(_) => StatusCode::NOT_FOUND,
            Self::RequestError(_) => StatusCode::BAD_GATEWAY,
            Self::ApiError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::CityNotFound(_) => Some("CITY_NOT_FOUND"),
            Self::RequestError(_) => Some("REQUEST_ERROR"),
            Self::ApiError(_) => Some("API_ERROR"),
            Self::InvalidResponse(_) => Some("INVALID_RESPONSE"),
        }
    }
}

impl_into_response!(ProviderError);

/// Upstream weather/geocoding source. Exactly one request per call, no
/// retries; callers own the failure policy.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, ProviderError>;
    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastFeed, ProviderError>;
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<GeoMatch>, ProviderError>;
}

pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(client: Client, api_key: &str, units: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            units: units.to_string(),
        }
    }

    /// Map a non-success response to an error carrying the provider's
    /// `message` field when the body has one.
    async fn api_error(response: Response) -> ProviderError {
        let status = response.status();
        let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
            message: format!("HTTP {}", status),
        });
        ProviderError::ApiError(body.message)
    }
}

#[async_trait]
impl Provider for OpenWeatherClient {
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, ProviderError> {
        tracing::debug!(city = %query, "Fetching current weather");

        // Query builder handles URL encoding for city names with spaces
        let response = self
            .client
            .get(CURRENT_WEATHER_API_URL)
            .query(&[
                ("q", query),
                ("units", &self.units),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received current weather response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::CityNotFound(query.to_string()));
        }

        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastFeed, ProviderError> {
        tracing::debug!(lat = %lat, lon = %lon, "Fetching forecast feed");

        let response = self
            .client
            .get(FORECAST_API_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", self.units.clone()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<GeoMatch>, ProviderError> {
        tracing::debug!(query = %query, limit = %limit, "Searching locations");

        let response = self
            .client
            .get(GEOCODING_API_URL)
            .query(&[
                ("q", query),
                ("limit", &limit.to_string()),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }
}
