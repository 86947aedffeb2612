use serde::Serialize;

use crate::provider::GeoMatch;

/// One autocomplete match for partial user input
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
}

impl From<GeoMatch> for SuggestionEntry {
    fn from(m: GeoMatch) -> Self {
        Self {
            name: m.name,
            state: m.state,
            country: m.country,
        }
    }
}
