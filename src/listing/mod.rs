//! # Listing Module
//!
//! The project listing page keeps its filters in the URL: `search`, `filter`
//! (category) and `location`. This module parses and rewrites those
//! parameters and recomputes the visible projects from them.
//!
//! ## Key Components
//!
//! - [`params`] - Query parameters and the [`FilterState`] they encode
//! - [`actions`] - Pure `(params, action) -> params` transitions
//! - [`filter`] - Project filtering and selector options
//! - [`outputs`] / [`tools`] - JSON tool surface

pub mod actions;
pub mod filter;
pub mod outputs;
pub mod params;
pub mod tools;

pub use actions::{ListingAction, reduce};
pub use filter::{Listing, ListingOptions, filter_projects};
pub use params::{FilterState, ListingParams, Selector, slugify};
pub use tools::ListingTools;
