//! Output types for search tools
//!
//! These types are the return values of the search tool methods. They are
//! serialized to JSON strings and can be deserialized in tests for type-safe
//! validation.

use serde::{Deserialize, Serialize};

use crate::search::ranker::Suggestion;

/// Output from suggest
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuggestOutput {
    /// Settled form of the query that was matched
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub total_results: usize,
}

impl SuggestOutput {
    pub fn new(query: String, suggestions: Vec<Suggestion>) -> Self {
        Self {
            query,
            total_results: suggestions.len(),
            suggestions,
        }
    }

    /// Convert to JSON string for the tool response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
