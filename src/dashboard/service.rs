use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::models::DashboardState;
use crate::forecast::ForecastService;
use crate::groups::{GroupService, DOMESTIC_CITIES, WORLD_CITIES};
use crate::provider::ProviderError;
use crate::weather::WeatherService;

pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Owns the dashboard state and runs full refresh cycles, either from the
/// background interval or from an explicit search.
///
/// Every cycle claims a generation from a monotonic counter; a cycle whose
/// generation is no longer the newest discards its writes. That fences a
/// slow timer tick racing a user search without aborting in-flight requests.
pub struct DashboardService {
    weather: Arc<WeatherService>,
    forecast: Arc<ForecastService>,
    groups: Arc<GroupService>,
    state: RwLock<DashboardState>,
    generation: AtomicU64,
}

impl DashboardService {
    pub fn new(
        weather: Arc<WeatherService>,
        forecast: Arc<ForecastService>,
        groups: Arc<GroupService>,
        default_city: &str,
    ) -> Self {
        Self {
            weather,
            forecast,
            groups,
            state: RwLock::new(DashboardState::new(default_city)),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Replace the focus city and run a full refresh immediately,
    /// independent of the background interval.
    pub async fn search(&self, city: &str) -> DashboardState {
        {
            let mut state = self.state.write().await;
            state.focus_city = city.trim().to_string();
        }
        self.refresh().await;
        self.snapshot().await
    }

    /// One full refresh cycle for the current focus city: the primary panel
    /// with its dependent forecast/nearby sections, and the two batch groups
    /// regardless of the primary outcome.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let focus_city = {
            let mut state = self.state.write().await;
            state.is_refreshing = true;
            state.focus_city.clone()
        };

        tracing::info!(city = %focus_city, generation, "Starting dashboard refresh");

        tokio::join!(
            self.refresh_focus(&focus_city, generation),
            self.refresh_groups(generation),
        );

        let mut state = self.state.write().await;
        if self.is_current(generation) {
            state.is_refreshing = false;
        }
    }

    /// Spawn the fixed-interval background refresh. The first tick fires
    /// immediately, which doubles as the startup refresh.
    pub fn spawn_refresh_loop(self: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                service.refresh().await;
            }
        })
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn refresh_focus(&self, city: &str, generation: u64) {
        match self.weather.current(city).await {
            Ok(current) => {
                let (lat, lon) = (current.lat, current.lon);
                let resolved_city = current.city.clone();
                {
                    let mut state = self.state.write().await;
                    if !self.is_current(generation) {
                        tracing::debug!(city, generation, "Discarding stale refresh result");
                        return;
                    }
                    state.current = Some(current);
                    state.last_error = None;
                }

                // Both dependent sections are best-effort; each failure
                // leaves its panel empty rather than stale.
                let forecast = self.forecast.daily(lat, lon).await;
                {
                    let mut state = self.state.write().await;
                    if !self.is_current(generation) {
                        return;
                    }
                    state.forecast = forecast;
                }

                let nearby = self.groups.nearby(&resolved_city).await;
                {
                    let mut state = self.state.write().await;
                    if !self.is_current(generation) {
                        return;
                    }
                    state.nearby = nearby;
                }
            }
            Err(e) => {
                let message = match e {
                    ProviderError::CityNotFound(_) => CITY_NOT_FOUND_MESSAGE,
                    _ => GENERIC_ERROR_MESSAGE,
                };
                tracing::warn!(city, error = %e, "Focus city refresh failed");

                let mut state = self.state.write().await;
                if !self.is_current(generation) {
                    return;
                }
                state.current = None;
                state.forecast.clear();
                state.nearby.clear();
                state.last_error = Some(message.to_string());
            }
        }
    }

    async fn refresh_groups(&self, generation: u64) {
        let (domestic, world) = tokio::join!(
            self.groups.batch(&DOMESTIC_CITIES),
            self.groups.batch(&WORLD_CITIES),
        );

        let mut state = self.state.write().await;
        if !self.is_current(generation) {
            tracing::debug!(generation, "Discarding stale group refresh");
            return;
        }
        state.domestic = domestic;
        state.world = world;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;
    use crate::provider::{ConditionInfo, ForecastFeed, ForecastSample, SampleMain, WindInfo};

    fn feed() -> ForecastFeed {
        // Three-hour cadence from a midnight boundary, two calendar days
        let base = 1_700_006_400;
        let list = (0..16)
            .map(|i| ForecastSample {
                dt: base + i * 3 * 3600,
                main: SampleMain {
                    temp_min: 15.0,
                    temp_max: 25.0,
                    humidity: 60,
                },
                weather: vec![ConditionInfo {
                    main: "Clouds".to_string(),
                    description: "scattered clouds".to_string(),
                    icon: "03d".to_string(),
                }],
                wind: WindInfo { speed: 4.0 },
            })
            .collect();
        ForecastFeed { list }
    }

    fn build(mock: MockProvider, default_city: &str) -> Arc<DashboardService> {
        let provider = Arc::new(mock);
        let weather = Arc::new(WeatherService::new(provider.clone()));
        let forecast = Arc::new(ForecastService::new(provider.clone()));
        let groups = Arc::new(GroupService::new(weather.clone()));
        Arc::new(DashboardService::new(weather, forecast, groups, default_city))
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_empty() {
        let service = build(MockProvider::new(), "Cuttack");
        let state = service.snapshot().await;
        assert_eq!(state.focus_city, "Cuttack");
        assert!(state.current.is_none());
        assert!(state.forecast.is_empty());
        assert!(state.last_error.is_none());
        assert!(!state.is_refreshing);
    }

    #[tokio::test]
    async fn test_successful_search_populates_all_panels() {
        let mock = MockProvider::new()
            .with_city("Cuttack", 28.4)
            .with_city("Bhubaneswar", 30.0)
            .with_city("Jagatpur", 29.0)
            .with_city("Delhi", 31.0)
            .with_city("London", 12.0)
            .with_feed(feed());
        let service = build(mock, "Delhi");

        let state = service.search("Cuttack").await;

        assert_eq!(state.focus_city, "Cuttack");
        let current = state.current.expect("current weather set");
        assert_eq!(current.city, "Cuttack");
        assert_eq!(current.temp, 28);
        assert!(state.last_error.is_none());
        assert!(!state.is_refreshing);

        // Two folded days minus today
        assert_eq!(state.forecast.len(), 1);

        // Only the nearby places the mock knows about, in table order
        let nearby: Vec<&str> = state.nearby.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(nearby, ["Bhubaneswar", "Jagatpur"]);

        // Batch groups refreshed with whatever succeeded
        assert_eq!(state.domestic.len(), 1);
        assert_eq!(state.world.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_search_clears_dependent_panels() {
        let mock = MockProvider::new()
            .with_city("Cuttack", 28.4)
            .with_city("Bhubaneswar", 30.0)
            .with_city("Delhi", 31.0)
            .with_feed(feed());
        let service = build(mock, "Cuttack");

        // Populate first, then search a city the provider rejects
        service.refresh().await;
        let state = service.search("Zzzznotacity").await;

        assert_eq!(state.focus_city, "Zzzznotacity");
        assert!(state.current.is_none());
        assert!(state.forecast.is_empty());
        assert!(state.nearby.is_empty());
        assert_eq!(state.last_error.as_deref(), Some(CITY_NOT_FOUND_MESSAGE));

        // Batch groups are independent of the focus-city outcome
        assert_eq!(state.domestic.len(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_uses_generic_message() {
        let mock = MockProvider::new().with_api_error("Cuttack");
        let service = build(mock, "Cuttack");

        let state = service.search("Cuttack").await;

        assert_eq!(state.last_error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_success() {
        let mock = MockProvider::new().with_city("Cuttack", 28.4).with_feed(feed());
        let service = build(mock, "Cuttack");

        service.search("Zzzznotacity").await;
        let state = service.search("Cuttack").await;

        assert!(state.last_error.is_none());
        assert!(state.current.is_some());
    }

    #[tokio::test]
    async fn test_stale_generation_discards_writes() {
        let mock = MockProvider::new().with_city("Cuttack", 28.4).with_feed(feed());
        let service = build(mock, "Cuttack");

        let stale = service.generation.fetch_add(1, Ordering::SeqCst) + 1;
        // A newer cycle claims the counter before the stale one writes
        service.generation.fetch_add(1, Ordering::SeqCst);

        service.refresh_focus("Cuttack", stale).await;

        let state = service.snapshot().await;
        assert!(state.current.is_none(), "stale write must be discarded");
    }
}
