use serde::Serialize;

use crate::forecast::DayForecast;
use crate::weather::{CitySummary, CurrentWeather};

/// Everything the dashboard page renders, replaced panel-by-panel on each
/// refresh cycle. `last_error` carries the user-facing message when the
/// focus-city fetch failed; the auxiliary panels fail silently.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardState {
    pub focus_city: String,
    pub current: Option<CurrentWeather>,
    pub forecast: Vec<DayForecast>,
    pub nearby: Vec<CitySummary>,
    pub domestic: Vec<CitySummary>,
    pub world: Vec<CitySummary>,
    pub last_error: Option<String>,
    pub is_refreshing: bool,
}

impl DashboardState {
    pub fn new(focus_city: impl Into<String>) -> Self {
        Self {
            focus_city: focus_city.into(),
            current: None,
            forecast: Vec::new(),
            nearby: Vec::new(),
            domestic: Vec::new(),
            world: Vec::new(),
            last_error: None,
            is_refreshing: false,
        }
    }
}
