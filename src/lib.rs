pub mod catalog;
pub mod config;
pub mod icons;
pub mod listing;
pub mod pages;
pub mod routes;
pub mod search;
pub mod service;

pub use catalog::Catalog;
pub use config::StudioConfig;
pub use service::StudioService;
