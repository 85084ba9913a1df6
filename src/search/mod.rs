//! # Search Module
//!
//! Search-as-you-type for the navigation bar: keystrokes are debounced into a
//! settled query, which is matched by substring containment against the
//! project and team tables to produce a short, ordered suggestion list.
//!
//! ## Key Components
//!
//! - [`config`] - Debounce interval and suggestion caps
//! - [`ranker`] - Pure suggestion computation over the catalog
//! - [`debounce`] - Cancellable timer that settles keystroke bursts
//! - [`search_box`] - Navigation-bar search state and its navigation intents
//! - [`outputs`] / [`tools`] - JSON tool surface

pub mod config;
pub mod debounce;
pub mod outputs;
pub mod ranker;
pub mod search_box;
pub mod tools;

pub use debounce::Debouncer;
pub use ranker::{Suggestion, settle, suggest};
pub use search_box::{SearchBox, SearchState};
pub use tools::SearchTools;
