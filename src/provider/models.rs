use serde::Deserialize;

// ============================================================================
// Raw OpenWeatherMap responses. Deserialized as-is; normalization into
// display records happens in the weather and forecast services.
// ============================================================================

/// Current weather by city name (`/data/2.5/weather`)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: SysInfo,
    pub main: MainInfo,
    pub weather: Vec<ConditionInfo>,
    pub wind: WindInfo,
    pub visibility: Option<u32>,
    pub coord: Coord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionInfo {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Five-day / three-hour forecast feed (`/data/2.5/forecast`)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastFeed {
    pub list: Vec<ForecastSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSample {
    /// Epoch seconds of the sample
    pub dt: i64,
    pub main: SampleMain,
    pub weather: Vec<ConditionInfo>,
    pub wind: WindInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleMain {
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u32,
}

/// Direct geocoding match (`/geo/1.0/direct`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMatch {
    pub name: String,
    pub state: Option<String>,
    pub country: String,
}

/// Error body OpenWeatherMap returns on non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
