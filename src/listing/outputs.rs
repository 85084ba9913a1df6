//! Output types for listing tools
//!
//! These types are the return values of the listing tool methods. They are
//! serialized to JSON strings and can be deserialized in tests for type-safe
//! validation.

use serde::{Deserialize, Serialize};

use crate::catalog::ProjectRecord;
use crate::listing::filter::{EMPTY_LISTING_MESSAGE, Listing, ListingOptions};
use crate::listing::params::FilterState;

/// Summary of a project as shown on a listing card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub image: String,
    pub description: String,
    pub featured: bool,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.clone(),
            location: project.location.clone(),
            image: project.image.clone(),
            description: project.description.clone(),
            featured: project.featured,
        }
    }
}

/// Everything shown in a project's detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetailsOutput {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Gallery images, cover first
    pub images: Vec<String>,
    pub work_scope: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_contact: Option<String>,
    pub featured: bool,
}

impl From<&ProjectRecord> for ProjectDetailsOutput {
    fn from(project: &ProjectRecord) -> Self {
        let mut images = project.images.clone();
        if images.is_empty() {
            images.push(project.image.clone());
        }

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.clone(),
            location: project.location.clone(),
            description: project.description.clone(),
            long_description: project.long_description.clone(),
            images,
            work_scope: project.work_scope.clone(),
            area: project.area.clone(),
            completion_date: project.completion_date.clone(),
            client_contact: project.client_contact.clone(),
            featured: project.featured,
        }
    }
}

impl ProjectDetailsOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Selector values currently applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedFilters {
    pub category: String,
    pub location: String,
    pub search: String,
}

impl From<&FilterState> for AppliedFilters {
    fn from(filter: &FilterState) -> Self {
        Self {
            category: filter.category.as_str().to_string(),
            location: filter.location.as_str().to_string(),
            search: filter.search.clone(),
        }
    }
}

/// Output from list_projects
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListProjectsOutput {
    pub href: String,
    pub filters: AppliedFilters,
    pub total_results: usize,
    pub projects: Vec<ProjectCard>,
    /// Present when no project matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub options: ListingOptions,
}

impl ListProjectsOutput {
    pub fn new(href: String, listing: &Listing<'_>, options: ListingOptions) -> Self {
        Self {
            href,
            filters: AppliedFilters::from(&listing.filter),
            total_results: listing.len(),
            projects: listing.projects.iter().map(|p| ProjectCard::from(*p)).collect(),
            message: listing
                .is_empty()
                .then(|| EMPTY_LISTING_MESSAGE.to_string()),
            options,
        }
    }

    /// Convert to JSON string for the tool response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }

    pub fn has_results(&self) -> bool {
        !self.projects.is_empty()
    }
}

/// Output from apply_listing_action
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApplyListingActionOutput {
    /// Href to navigate to
    pub href: String,
    /// Whether the navigation replaces the current history entry
    pub replace: bool,
}

impl ApplyListingActionOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Error output for listing tools
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListingErrorOutput {
    pub error: String,
}

impl ListingErrorOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::listing::filter::filter_projects;
    use crate::listing::params::ListingParams;

    #[test]
    fn test_empty_listing_carries_message() {
        let catalog = Catalog::builtin().unwrap();
        let listing = filter_projects(
            &catalog,
            &ListingParams::parse("location=Udaipur").filter_state(),
        );
        let output = ListProjectsOutput::new(
            "/projects?location=Udaipur".to_string(),
            &listing,
            ListingOptions::from_catalog(&catalog),
        );

        assert!(!output.has_results());
        assert_eq!(output.message.as_deref(), Some("No projects found"));
        assert_eq!(output.filters.location, "Udaipur");
        assert_eq!(output.filters.category, "all");

        let json = output.to_json();
        let deserialized: ListProjectsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn test_details_fall_back_to_cover_image() {
        let mut project = crate::catalog::fixtures::project("loft", "Loft", "Renovation", "Jaipur");
        project.area = Some("900 sq ft".to_string());

        let details = ProjectDetailsOutput::from(&project);
        assert_eq!(details.images, vec!["/assets/loft.jpg"]);
        assert_eq!(details.area.as_deref(), Some("900 sq ft"));

        let json = details.to_json();
        assert!(!json.contains("long_description"));
        let deserialized: ProjectDetailsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(details, deserialized);
    }

    #[test]
    fn test_error_output() {
        let output = ListingErrorOutput::new("Invalid href");
        let deserialized: ListingErrorOutput = serde_json::from_str(&output.to_json()).unwrap();
        assert_eq!(output, deserialized);
    }
}
