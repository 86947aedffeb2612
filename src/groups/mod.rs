mod cities;
mod service;

pub use cities::{nearby_places, DOMESTIC_CITIES, WORLD_CITIES};
pub use service::GroupService;
