mod client;
#[cfg(test)]
pub mod mock;
mod models;

pub use client::{OpenWeatherClient, Provider, ProviderError};
pub use models::*;
