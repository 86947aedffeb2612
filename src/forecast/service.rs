use std::sync::Arc;

use chrono::{Local, TimeZone};

use super::models::DayForecast;
use crate::provider::{ForecastSample, Provider};
use crate::weather::icon_key;

/// The dashboard shows at most a week of upcoming days.
const MAX_FORECAST_DAYS: usize = 7;

/// Fold the chronological three-hour feed into one record per calendar day
/// in `tz`.
///
/// The first sample on a date seeds every field; later samples on the same
/// date only widen the min/max range. The feed starts mid-way through the
/// current day, so the first folded day is always today and is dropped.
fn fold_daily<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DayForecast> {
    let mut days: Vec<DayForecast> = Vec::new();

    for sample in samples {
        let Some(date) = tz.timestamp_opt(sample.dt, 0).single().map(|t| t.date_naive()) else {
            continue;
        };

        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => {
                day.temp_min = day.temp_min.min(sample.main.temp_min);
                day.temp_max = day.temp_max.max(sample.main.temp_max);
            }
            None => {
                let condition = sample.weather.first();
                days.push(DayForecast {
                    date,
                    temp_min: sample.main.temp_min,
                    temp_max: sample.main.temp_max,
                    condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
                    humidity: sample.main.humidity,
                    wind_speed: sample.wind.speed,
                    icon: condition.map(|c| icon_key(&c.icon)).unwrap_or("clear"),
                });
            }
        }
    }

    days.into_iter().skip(1).take(MAX_FORECAST_DAYS).collect()
}

/// Fetches the forecast feed for a coordinate and folds it by day.
pub struct ForecastService {
    provider: Arc<dyn Provider>,
}

impl ForecastService {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Best-effort: a feed failure is logged and yields an empty list, the
    /// caller never sees the error.
    pub async fn daily(&self, lat: f64, lon: f64) -> Vec<DayForecast> {
        match self.provider.forecast(lat, lon).await {
            Ok(feed) => {
                let days = fold_daily(&feed.list, &Local);
                tracing::info!(lat = %lat, lon = %lon, days = days.len(), "Forecast folded");
                days
            }
            Err(e) => {
                tracing::error!(lat = %lat, lon = %lon, error = %e, "Failed to fetch forecast feed");
                Vec::new()
            }
        }
    }

}
