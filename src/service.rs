use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::StudioConfig;
use crate::listing::tools::{
    ApplyListingActionParams, ListProjectsParams, ListingTools, ProjectDetailsParams,
};
use crate::pages::tools::{PageTools, ResolveRouteParams};
use crate::search::SearchBox;
use crate::search::tools::{SearchTools, SuggestParams};

/// Composition root: owns the shared catalog and the tool groups built on it
#[derive(Debug, Clone)]
pub struct StudioService {
    catalog: Arc<Catalog>,
    debounce: Duration,
    search_tools: SearchTools,
    listing_tools: ListingTools,
    page_tools: PageTools,
}

impl StudioService {
    pub fn new(catalog: Catalog, debounce: Duration) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            search_tools: SearchTools::new(catalog.clone()),
            listing_tools: ListingTools::new(catalog.clone()),
            page_tools: PageTools::new(catalog.clone()),
            catalog,
            debounce,
        }
    }

    pub fn from_config(config: &StudioConfig) -> Result<Self> {
        Ok(Self::new(config.load_catalog()?, config.debounce))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A navigation-bar search box bound to the shared catalog
    pub fn search_box(&self) -> SearchBox {
        SearchBox::new(self.catalog.clone(), self.debounce)
    }

    // Search tools
    pub fn suggest(&self, params: SuggestParams) -> String {
        self.search_tools.suggest(params)
    }

    // Listing tools
    pub fn list_projects(&self, params: ListProjectsParams) -> String {
        self.listing_tools.list_projects(params)
    }

    pub fn project_details(&self, params: ProjectDetailsParams) -> String {
        self.listing_tools.project_details(params)
    }

    pub fn apply_listing_action(&self, params: ApplyListingActionParams) -> String {
        self.listing_tools.apply_listing_action(params)
    }

    // Page tools
    pub fn resolve_route(&self, params: ResolveRouteParams) -> String {
        self.page_tools.resolve_route(params)
    }

    pub fn overview(&self) -> String {
        self.page_tools.overview()
    }
}
