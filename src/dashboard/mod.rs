pub mod handlers;
mod models;
mod service;

pub use models::DashboardState;
pub use service::DashboardService;
