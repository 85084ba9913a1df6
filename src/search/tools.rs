use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::search::outputs::SuggestOutput;
use crate::search::ranker::{settle, suggest};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestParams {
    #[schemars(description = "Search text as typed; it is trimmed and lower-cased before matching")]
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct SearchTools {
    catalog: Arc<Catalog>,
}

impl SearchTools {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Suggestions for an already settled query
    pub fn suggest(&self, params: SuggestParams) -> String {
        let query = settle(&params.query);
        let suggestions = suggest(&query, &self.catalog);
        tracing::debug!("Query {:?} matched {} suggestions", query, suggestions.len());
        SuggestOutput::new(query, suggestions).to_json()
    }
}
