use std::sync::Arc;

use futures::future::join_all;

use super::cities;
use crate::weather::{CitySummary, WeatherService};

/// Issue one current-weather fetch per name, all concurrently, and wait for
/// every one to settle. Successes come back in input order; failures are
/// logged and dropped, never placeholders and never a whole-batch abort.
async fn fetch_all_settled(weather: &WeatherService, names: &[&str]) -> Vec<CitySummary> {
    let fetches = names.iter().map(|name| weather.summary(name));

    join_all(fetches)
        .await
        .into_iter()
        .zip(names)
        .filter_map(|(result, name)| match result {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(city = %name, error = %e, "Dropping failed group fetch");
                None
            }
        })
        .collect()
}

/// Fetches the fixed city groups and the nearby-area panel.
pub struct GroupService {
    weather: Arc<WeatherService>,
}

impl GroupService {
    pub fn new(weather: Arc<WeatherService>) -> Self {
        Self { weather }
    }

    /// Current weather for a caller-supplied city list
    pub async fn batch(&self, names: &[&str]) -> Vec<CitySummary> {
        fetch_all_settled(&self.weather, names).await
    }

    /// Current weather for the places near a resolved city. Cities without a
    /// table entry yield an empty panel without touching the network.
    pub async fn nearby(&self, resolved_city: &str) -> Vec<CitySummary> {
        match cities::nearby_places(resolved_city) {
            Some(places) => fetch_all_settled(&self.weather, &places).await,
            None => {
                tracing::debug!(city = %resolved_city, "No nearby-area entry for city");
                Vec::new()
            }
        }
    }
}
