//! Listing URL query parameters and the filter state derived from them

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Free-text search parameter
pub const SEARCH_PARAM: &str = "search";
/// Category parameter
pub const FILTER_PARAM: &str = "filter";
/// Location parameter
pub const LOCATION_PARAM: &str = "location";
/// Selector value meaning "no constraint"
pub const ALL: &str = "all";

/// Ordered query parameters with URLSearchParams semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    pairs: Vec<(String, String)>,
}

impl ListingParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string (without `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first value for `key` in place and drop any others, or append
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every value for `key`
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Filter state encoded by these parameters
    pub fn filter_state(&self) -> FilterState {
        FilterState::from_params(self)
    }
}

/// A single filter dimension: unconstrained or pinned to one value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// Selector for a raw parameter value; absent, empty and `all` are unconstrained
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Selector::All,
            Some(v) if v.eq_ignore_ascii_case(ALL) => Selector::All,
            Some(v) => Selector::Only(v.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Value shown in the selector control
    pub fn as_str(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Only(v) => v,
        }
    }
}

/// Listing filters reconstructed from the URL on every navigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Category slug or `all`
    pub category: Selector,
    /// Location as written, or `all`
    pub location: Selector,
    /// Trimmed, lower-cased search text; empty means no text filter
    pub search: String,
}

impl FilterState {
    pub fn from_params(params: &ListingParams) -> Self {
        let category = match Selector::from_param(params.get(FILTER_PARAM)) {
            Selector::Only(value) => Selector::Only(slugify(&value)),
            Selector::All => Selector::All,
        };

        Self {
            category,
            location: Selector::from_param(params.get(LOCATION_PARAM)),
            search: params
                .get(SEARCH_PARAM)
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.location.is_all() && self.search.is_empty()
    }
}

/// Canonical category encoding: lower-cased, whitespace runs replaced by `-`
pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
