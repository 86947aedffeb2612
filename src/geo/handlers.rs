use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::models::SuggestionEntry;
use crate::provider::ProviderError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Partial city name typed by the user
    pub q: Option<String>,
}

/// City autocomplete for the search box
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<Vec<SuggestionEntry>>, ProviderError> {
    let q = query.q.unwrap_or_default();
    let entries = state.suggest_service.suggest(&q).await?;
    Ok(Json(entries))
}
