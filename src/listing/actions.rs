//! Pure transitions over the listing URL parameters
//!
//! Both entry points that touch the listing URL (the navigation-bar search box
//! and the listing page's selectors) go through [`reduce`], so the rules about
//! which parameters survive an action live in one place.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::listing::params::{ALL, FILTER_PARAM, LOCATION_PARAM, ListingParams, SEARCH_PARAM, slugify};

/// A change requested against the listing URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ListingAction {
    /// Search submitted from the navigation bar
    SubmitSearch(String),
    /// Search box cleared
    ClearSearch,
    /// Category selector changed (`all` or a category)
    SetCategory(String),
    /// Location selector changed (`all` or a location)
    SetLocation(String),
}

/// Apply `action` to `params`, returning the new parameter set
pub fn reduce(params: &ListingParams, action: &ListingAction) -> ListingParams {
    match action {
        ListingAction::SubmitSearch(text) => {
            // a submitted search starts a fresh listing
            let mut next = ListingParams::new();
            let text = text.trim();
            if !text.is_empty() {
                next.set(SEARCH_PARAM, text);
            }
            next
        }
        ListingAction::ClearSearch => {
            let mut next = params.clone();
            next.remove(SEARCH_PARAM);
            next
        }
        ListingAction::SetCategory(value) => set_selector(params, FILTER_PARAM, value, slugify),
        ListingAction::SetLocation(value) => {
            set_selector(params, LOCATION_PARAM, value, str::to_string)
        }
    }
}

fn set_selector(
    params: &ListingParams,
    key: &str,
    value: &str,
    encode: impl Fn(&str) -> String,
) -> ListingParams {
    let mut next = params.clone();
    // read search before touching the selector so it can be re-applied
    let search = next.get(SEARCH_PARAM).map(str::to_string);

    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        next.remove(key);
    } else {
        next.set(key, encode(value));
    }

    if let Some(search) = search {
        next.set(SEARCH_PARAM, search);
    }
    next
}
