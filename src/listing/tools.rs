use std::sync::Arc;

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::listing::actions::{ListingAction, reduce};
use crate::listing::filter::{ListingOptions, filter_projects};
use crate::listing::outputs::{
    ApplyListingActionOutput, ListProjectsOutput, ListingErrorOutput, ProjectDetailsOutput,
};
use crate::routes::{Location, PROJECTS_PATH};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(
        description = "Listing href, e.g. '/projects?filter=construction&search=villa' (defaults to '/projects')"
    )]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApplyListingActionParams {
    #[schemars(description = "Href of the page the action is performed on")]
    pub href: String,
    #[schemars(description = "The action to apply")]
    pub action: ListingAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectDetailsParams {
    #[schemars(description = "Project identifier, e.g. 'pcp-sikar'")]
    pub project_id: String,
}

#[derive(Debug, Clone)]
pub struct ListingTools {
    catalog: Arc<Catalog>,
}

impl ListingTools {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Recompute the visible projects for a listing href
    pub fn list_projects(&self, params: ListProjectsParams) -> String {
        let href = params.href.unwrap_or_else(|| PROJECTS_PATH.to_string());
        match self.list_projects_inner(&href) {
            Ok(output) => output.to_json(),
            Err(e) => ListingErrorOutput::new(format!("Failed to list projects: {e:#}")).to_json(),
        }
    }

    fn list_projects_inner(&self, href: &str) -> Result<ListProjectsOutput> {
        let location = Location::parse(href)?;
        let listing = filter_projects(&self.catalog, &location.params().filter_state());
        tracing::debug!("Listing {} matched {} projects", location, listing.len());

        Ok(ListProjectsOutput::new(
            location.to_href(),
            &listing,
            ListingOptions::from_catalog(&self.catalog),
        ))
    }

    /// Full record behind a project card, as shown in its detail view
    pub fn project_details(&self, params: ProjectDetailsParams) -> String {
        match self.catalog.project(&params.project_id) {
            Some(project) => ProjectDetailsOutput::from(project).to_json(),
            None => {
                tracing::debug!("Unknown project '{}'", params.project_id);
                ListingErrorOutput::new(format!("Project '{}' not found", params.project_id))
                    .to_json()
            }
        }
    }

    /// Apply a selector or search action and return the resulting href
    pub fn apply_listing_action(&self, params: ApplyListingActionParams) -> String {
        match Self::apply_inner(&params.href, &params.action) {
            Ok(output) => output.to_json(),
            Err(e) => ListingErrorOutput::new(format!("Failed to apply action: {e:#}")).to_json(),
        }
    }

    fn apply_inner(href: &str, action: &ListingAction) -> Result<ApplyListingActionOutput> {
        let current = Location::parse(href)?;

        // clearing the search away from the listing only resets the text box
        if matches!(action, ListingAction::ClearSearch) && !current.is_listing() {
            return Ok(ApplyListingActionOutput {
                href: current.to_href(),
                replace: true,
            });
        }

        let next = Location::listing(reduce(current.params(), action));
        Ok(ApplyListingActionOutput {
            href: next.to_href(),
            replace: matches!(action, ListingAction::ClearSearch),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::outputs::ListProjectsOutput;

    fn details(project_id: &str) -> String {
        tools().project_details(ProjectDetailsParams {
            project_id: project_id.to_string(),
        })
    }

    fn tools() -> ListingTools {
        ListingTools::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn test_list_projects_default_href() {
        let json = tools().list_projects(ListProjectsParams { href: None });
        let output: ListProjectsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.href, "/projects");
        assert_eq!(output.total_results, 6);
        assert!(output.message.is_none());
    }

    #[test]
    fn test_list_projects_with_filters() {
        let json = tools().list_projects(ListProjectsParams {
            href: Some("/projects?search=villa".to_string()),
        });
        let output: ListProjectsOutput = serde_json::from_str(&json).unwrap();
        let titles: Vec<&str> = output.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Villa", "Villa"]);
        assert!(output.projects.iter().all(|p| p.location == "Jagatpura"));
    }

    #[test]
    fn test_project_details_returns_full_record() {
        let output: ProjectDetailsOutput = serde_json::from_str(&details("jk-lon")).unwrap();
        assert_eq!(output.title, "JK LON Hospital");
        assert_eq!(output.images.len(), 9);
        assert_eq!(output.work_scope[0], "Renovation Planning");
        assert_eq!(output.area.as_deref(), Some("1,200 sq ft"));
        assert_eq!(output.completion_date.as_deref(), Some("August 2023"));
        assert_eq!(output.client_contact.as_deref(), Some("Available upon request"));
        assert!(output.long_description.unwrap().contains("apartment project"));
    }

    #[test]
    fn test_project_details_unknown_id() {
        let output: ListingErrorOutput = serde_json::from_str(&details("lake-house")).unwrap();
        assert_eq!(output.error, "Project 'lake-house' not found");
    }

    #[test]
    fn test_apply_category_preserves_search() {
        let json = tools().apply_listing_action(ApplyListingActionParams {
            href: "/projects?search=villa".to_string(),
            action: ListingAction::SetCategory("Consultation".to_string()),
        });
        let output: ApplyListingActionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.href, "/projects?search=villa&filter=consultation");
        assert!(!output.replace);
    }

    #[test]
    fn test_clear_search_off_listing_keeps_location() {
        let json = tools().apply_listing_action(ApplyListingActionParams {
            href: "/about".to_string(),
            action: ListingAction::ClearSearch,
        });
        let output: ApplyListingActionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.href, "/about");
    }

    #[test]
    fn test_clear_search_on_listing_replaces() {
        let json = tools().apply_listing_action(ApplyListingActionParams {
            href: "/projects?filter=construction&search=villa".to_string(),
            action: ListingAction::ClearSearch,
        });
        let output: ApplyListingActionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output.href, "/projects?filter=construction");
        assert!(output.replace);
    }
}
