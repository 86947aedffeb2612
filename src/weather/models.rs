use serde::Serialize;

/// Normalized conditions for the primary panel. Superseded wholesale by the
/// next successful fetch, never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    /// Whole degrees for display
    pub temp: i64,
    pub feels_like: i64,
    pub condition: String,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_km: Option<f64>,
    /// Local time of day, "%H:%M"
    pub sunrise: String,
    pub sunset: String,
    pub lat: f64,
    pub lon: f64,
    pub icon: &'static str,
}

/// Lightweight entry for the batch-group and nearby-area panels
#[derive(Debug, Clone, Serialize)]
pub struct CitySummary {
    pub city: String,
    pub temp: i64,
    pub condition: String,
    pub icon: &'static str,
}
