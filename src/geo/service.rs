use std::sync::Arc;
use std::time::Duration;

use super::models::SuggestionEntry;
use crate::cache::{normalize_cache_key, TtlCache};
use crate::provider::{Provider, ProviderError};

/// Cache of suggestion sets keyed by normalized query text
pub type SuggestCache = Arc<TtlCache<String, Vec<SuggestionEntry>>>;

/// Geocoding data changes rarely; a day of reuse per query is safe.
pub fn create_suggest_cache() -> SuggestCache {
    Arc::new(TtlCache::new(Duration::from_secs(24 * 60 * 60)))
}

/// Start a background task that clears expired suggestion entries hourly
pub fn start_cache_cleanup_task(cache: SuggestCache) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60 * 60));
        loop {
            interval.tick().await;
            let before = cache.len();
            cache.cleanup();
            let after = cache.len();
            if before != after {
                tracing::debug!(
                    removed = before - after,
                    remaining = after,
                    "Suggestion cache cleanup completed"
                );
            }
        }
    });
}

/// City-name autocomplete over the direct geocoding endpoint.
pub struct SuggestService {
    provider: Arc<dyn Provider>,
    cache: SuggestCache,
    limit: u32,
}

impl SuggestService {
    pub fn new(provider: Arc<dyn Provider>, cache: SuggestCache, limit: u32) -> Self {
        Self {
            provider,
            cache,
            limit,
        }
    }

    /// Up to `limit` matches for a partial city name. Blank input returns an
    /// empty set without a provider call.
    pub async fn suggest(&self, query: &str) -> Result<Vec<SuggestionEntry>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let cache_key = normalize_cache_key(query);
        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!(query = %query, "Suggestion cache hit");
            return Ok(cached);
        }

        let entries: Vec<SuggestionEntry> = self
            .provider
            .search(query, self.limit)
            .await?
            .into_iter()
            .map(SuggestionEntry::from)
            .collect();

        self.cache.insert(cache_key, entries.clone());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;
    use crate::provider::GeoMatch;
    use std::sync::atomic::Ordering;

    fn matches() -> Vec<GeoMatch> {
        vec![
            GeoMatch {
                name: "Cuttack".to_string(),
                state: Some("Odisha".to_string()),
                country: "IN".to_string(),
            },
            GeoMatch {
                name: "Cuttack Sadar".to_string(),
                state: Some("Odisha".to_string()),
                country: "IN".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_provider_call() {
        let provider = Arc::new(MockProvider::new().with_matches(matches()));
        let service = SuggestService::new(provider.clone(), create_suggest_cache(), 5);

        assert!(service.suggest("").await.unwrap().is_empty());
        assert!(service.suggest("   ").await.unwrap().is_empty());
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_suggest_maps_matches() {
        let provider = Arc::new(MockProvider::new().with_matches(matches()));
        let service = SuggestService::new(provider, create_suggest_cache(), 5);

        let entries = service.suggest("Cutt").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Cuttack");
        assert_eq!(entries[0].state.as_deref(), Some("Odisha"));
        assert_eq!(entries[0].country, "IN");
    }

    #[tokio::test]
    async fn test_suggest_respects_limit() {
        let provider = Arc::new(MockProvider::new().with_matches(matches()));
        let service = SuggestService::new(provider, create_suggest_cache(), 1);

        let entries = service.suggest("Cutt").await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_repeat_query_served_from_cache() {
        let provider = Arc::new(MockProvider::new().with_matches(matches()));
        let service = SuggestService::new(provider.clone(), create_suggest_cache(), 5);

        service.suggest("Cutt").await.unwrap();
        let entries = service.suggest("  cutt ").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 1);
    }
}
