use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day folded from the three-hour forecast feed.
///
/// Min/max temperatures merge every sample on the date; condition, humidity,
/// wind and icon come from the first sample seen for the date.
#[derive(Debug, Clone, Serialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: f64,
    pub icon: &'static str,
}
