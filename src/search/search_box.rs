//! Navigation-bar search box
//!
//! [`SearchBox`] owns the search state of one navigation bar: the raw text,
//! the settled query, the suggestion dropdown and the mobile menu flag. Its
//! operations return [`Navigation`] intents instead of navigating, so the
//! caller decides how the URL is updated.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::listing::actions::{ListingAction, reduce};
use crate::listing::params::{ListingParams, SEARCH_PARAM};
use crate::routes::{Location, Navigation};
use crate::search::debounce::Debouncer;
use crate::search::ranker::{Suggestion, suggest};

/// Ephemeral search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text currently in the input
    pub raw_input: String,
    /// Last settled query, if any burst has settled yet
    pub settled_query: Option<String>,
    /// Suggestions for the settled query
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug)]
pub struct SearchBox {
    catalog: Arc<Catalog>,
    state: SearchState,
    menu_open: bool,
    debouncer: Debouncer,
    settled_rx: mpsc::UnboundedReceiver<String>,
}

impl SearchBox {
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        let (debouncer, settled_rx) = Debouncer::new(delay);
        Self {
            catalog,
            state: SearchState::default(),
            menu_open: false,
            debouncer,
            settled_rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn raw_input(&self) -> &str {
        &self.state.raw_input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.state.suggestions
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Whether a keystroke burst is still waiting to settle
    pub fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Record a keystroke; suggestions follow once the input settles
    ///
    /// A query that settled earlier but was not applied yet is superseded.
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.raw_input.clone_from(&text);
        self.discard_settled();
        self.debouncer.push(text);
    }

    /// Wait for the next settled query and apply it
    ///
    /// Returns `None` once the search box has been closed.
    pub async fn next_settled(&mut self) -> Option<&[Suggestion]> {
        let query = self.settled_rx.recv().await?;
        self.apply_settled(query);
        Some(&self.state.suggestions)
    }

    /// Apply a settled query, replacing the suggestion list
    pub fn apply_settled(&mut self, query: String) {
        self.state.suggestions = suggest(&query, &self.catalog);
        tracing::debug!(
            "Settled query {:?} produced {} suggestions",
            query,
            self.state.suggestions.len()
        );
        self.state.settled_query = Some(query);
    }

    /// Submit the current text: go to the listing filtered by it
    pub fn submit(&mut self) -> Navigation {
        let params = reduce(
            &ListingParams::new(),
            &ListingAction::SubmitSearch(self.state.raw_input.clone()),
        );
        self.dismiss();
        Navigation::push(Location::listing(params))
    }

    /// Clear the text box
    ///
    /// On the listing view this also drops the `search` parameter, keeping the
    /// other filters; elsewhere only local state changes.
    pub fn clear(&mut self, current: &Location) -> Option<Navigation> {
        self.state.suggestions.clear();
        self.input(String::new());

        current.is_listing().then(|| {
            let params = reduce(current.params(), &ListingAction::ClearSearch);
            Navigation::replace(Location::listing(params))
        })
    }

    /// Follow a suggestion
    pub fn select(&mut self, suggestion: &Suggestion) -> Navigation {
        self.state.raw_input = suggestion.label().to_string();
        self.dismiss();

        match suggestion {
            Suggestion::Project { title, .. } => {
                let params = reduce(
                    &ListingParams::new(),
                    &ListingAction::SubmitSearch(title.clone()),
                );
                Navigation::push(Location::listing(params))
            }
            Suggestion::Team { member_id, .. } => Navigation::push(Location::team_member(member_id)),
        }
    }

    /// Mirror the listing URL's `search` value into the text box
    pub fn sync_from_location(&mut self, location: &Location) {
        if location.is_listing() {
            self.state.raw_input = location
                .params()
                .get(SEARCH_PARAM)
                .unwrap_or_default()
                .to_string();
        }
    }

    /// Tear down the search box; no settled query is delivered afterwards
    pub fn close(&mut self) {
        self.debouncer.close();
        self.settled_rx.close();
    }

    fn dismiss(&mut self) {
        self.debouncer.cancel_pending();
        self.discard_settled();
        self.state.suggestions.clear();
        self.menu_open = false;
    }

    /// Drop queries that settled but were never applied
    fn discard_settled(&mut self) {
        while let Ok(query) = self.settled_rx.try_recv() {
            tracing::debug!("Discarding stale settled query {:?}", query);
        }
    }
}
