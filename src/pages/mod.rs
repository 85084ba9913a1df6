//! # Pages Module
//!
//! Tool surface for the non-listing pages: route resolution (including the
//! team page's anchor target) and the landing page overview of featured
//! projects, leadership and services.

pub mod outputs;
pub mod tools;

pub use tools::PageTools;
