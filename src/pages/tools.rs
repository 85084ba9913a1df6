use std::sync::Arc;

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::listing::outputs::{AppliedFilters, ProjectCard};
use crate::pages::outputs::{
    MemberCard, NOT_FOUND_MESSAGE, OverviewOutput, PageErrorOutput, ResolveRouteOutput,
    ServiceCard,
};
use crate::routes::{Location, Route, team_anchor};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveRouteParams {
    #[schemars(description = "In-app href, e.g. '/projects?filter=construction' or '/team#founder'")]
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct PageTools {
    catalog: Arc<Catalog>,
}

impl PageTools {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Resolve an href to the view it renders
    pub fn resolve_route(&self, params: ResolveRouteParams) -> String {
        match self.resolve_route_inner(&params.href) {
            Ok(output) => output.to_json(),
            Err(e) => PageErrorOutput::new(format!("Failed to resolve route: {e:#}")).to_json(),
        }
    }

    fn resolve_route_inner(&self, href: &str) -> Result<ResolveRouteOutput> {
        let location = Location::parse(href)?;
        let route = Route::resolve(&location);
        let mut output = ResolveRouteOutput::new(location.to_href(), route.name());

        match route {
            Route::Projects(filter) => output.filters = Some(AppliedFilters::from(&filter)),
            Route::Team { anchor } => {
                output.scroll_to =
                    team_anchor(&self.catalog, anchor.as_deref()).map(|m| m.id.clone());
                output.anchor = anchor;
            }
            Route::Redirect(target) => output.redirect_to = Some(target),
            Route::NotFound => output.message = Some(NOT_FOUND_MESSAGE.to_string()),
            Route::Home | Route::About | Route::Contact => {}
        }
        Ok(output)
    }

    /// Landing page content: featured projects, leadership and services
    pub fn overview(&self) -> String {
        OverviewOutput {
            featured_projects: self
                .catalog
                .featured_projects()
                .into_iter()
                .map(ProjectCard::from)
                .collect(),
            leadership: self
                .catalog
                .leadership()
                .into_iter()
                .map(MemberCard::from)
                .collect(),
            services: self.catalog.services().iter().map(ServiceCard::from).collect(),
        }
        .to_json()
    }
}
