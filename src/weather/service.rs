use std::sync::Arc;

use chrono::{Local, TimeZone};

use super::models::{CitySummary, CurrentWeather};
use crate::provider::{CurrentConditions, Provider, ProviderError};

/// Map an OpenWeatherMap icon code to the dashboard's icon key. Codes not in
/// the table fall back to `clear`.
pub fn icon_key(code: &str) -> &'static str {
    match code {
        "01d" | "01n" => "clear",
        "02d" | "02n" | "03d" | "03n" | "04d" | "04n" => "cloud",
        "09d" | "09n" => "drizzle",
        "10d" | "10n" | "11d" | "11n" => "rain",
        "13d" | "13n" => "snow",
        _ => "clear",
    }
}

fn local_time(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn normalize(raw: CurrentConditions) -> Result<CurrentWeather, ProviderError> {
    let condition = raw.weather.first().ok_or_else(|| {
        ProviderError::InvalidResponse("No weather information available".to_string())
    })?;

    Ok(CurrentWeather {
        city: raw.name,
        country: raw.sys.country,
        temp: raw.main.temp.floor() as i64,
        feels_like: raw.main.feels_like.floor() as i64,
        condition: condition.main.clone(),
        description: condition.description.clone(),
        humidity: raw.main.humidity,
        wind_speed: raw.wind.speed,
        visibility_km: raw.visibility.map(|m| f64::from(m) / 1000.0),
        sunrise: local_time(raw.sys.sunrise),
        sunset: local_time(raw.sys.sunset),
        lat: raw.coord.lat,
        lon: raw.coord.lon,
        icon: icon_key(&condition.icon),
    })
}

fn summarize(raw: CurrentConditions) -> Result<CitySummary, ProviderError> {
    let condition = raw.weather.first().ok_or_else(|| {
        ProviderError::InvalidResponse("No weather information available".to_string())
    })?;

    Ok(CitySummary {
        city: raw.name.clone(),
        temp: raw.main.temp.floor() as i64,
        condition: condition.main.clone(),
        icon: icon_key(&condition.icon),
    })
}

/// Fetches and normalizes current conditions for one city.
pub struct WeatherService {
    provider: Arc<dyn Provider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let raw = self.provider.current_weather(city).await?;
        let weather = normalize(raw)?;
        tracing::info!(city = %weather.city, temp = %weather.temp, "Current weather fetched");
        Ok(weather)
    }

    pub async fn summary(&self, city: &str) -> Result<CitySummary, ProviderError> {
        let raw = self.provider.current_weather(city).await?;
        summarize(raw)
    }
}
