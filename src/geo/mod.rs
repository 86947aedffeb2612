pub mod handlers;
mod models;
mod service;

pub use models::SuggestionEntry;
pub use service::{create_suggest_cache, start_cache_cleanup_task, SuggestCache, SuggestService};
