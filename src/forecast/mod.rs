mod models;
mod service;

pub use models::DayForecast;
pub use service::ForecastService;
