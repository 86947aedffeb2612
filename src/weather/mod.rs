mod models;
mod service;

pub use models::{CitySummary, CurrentWeather};
pub use service::{icon_key, WeatherService};
