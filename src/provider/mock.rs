//! Programmable in-memory provider for service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::client::{Provider, ProviderError};
use super::models::*;

#[derive(Default)]
pub struct MockProvider {
    conditions: HashMap<String, CurrentConditions>,
    api_errors: HashSet<String>,
    feed: Option<ForecastFeed>,
    matches: Vec<GeoMatch>,
    pub weather_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city that resolves successfully
    pub fn with_city(mut self, query: &str, temp: f64) -> Self {
        self.conditions
            .insert(query.to_lowercase(), conditions(query, temp));
        self
    }

    /// Register a city whose fetch fails with a provider-reported error
    /// (anything but city-not-found)
    pub fn with_api_error(mut self, query: &str) -> Self {
        self.api_errors.insert(query.to_lowercase());
        self
    }

    pub fn with_feed(mut self, feed: ForecastFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn with_matches(mut self, matches: Vec<GeoMatch>) -> Self {
        self.matches = matches;
        self
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, ProviderError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        let key = query.to_lowercase();
        if self.api_errors.contains(&key) {
            return Err(ProviderError::ApiError("upstream unavailable".to_string()));
        }
        self.conditions
            .get(&key)
            .cloned()
            .ok_or_else(|| ProviderError::CityNotFound(query.to_string()))
    }

    async fn forecast(&self, _lat: f64, _lon: f64) -> Result<ForecastFeed, ProviderError> {
        self.feed
            .clone()
            .ok_or_else(|| ProviderError::ApiError("no feed configured".to_string()))
    }

    async fn search(&self, _query: &str, limit: u32) -> Result<Vec<GeoMatch>, ProviderError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matches.iter().take(limit as usize).cloned().collect())
    }
}

/// Plausible raw conditions for `city`
pub fn conditions(city: &str, temp: f64) -> CurrentConditions {
    CurrentConditions {
        name: city.to_string(),
        sys: SysInfo {
            country: "IN".to_string(),
            sunrise: 1_700_000_000,
            sunset: 1_700_040_000,
        },
        main: MainInfo {
            temp,
            feels_like: temp + 2.0,
            humidity: 70,
        },
        weather: vec![ConditionInfo {
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }],
        wind: WindInfo { speed: 3.0 },
        visibility: Some(10_000),
        coord: Coord {
            lat: 20.46,
            lon: 85.88,
        },
    }
}
