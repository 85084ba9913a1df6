//! Output types for page tools
//!
//! These types are the return values of the page tool methods. They are
//! serialized to JSON strings and can be deserialized in tests for type-safe
//! validation.

use serde::{Deserialize, Serialize};

use crate::catalog::{MemberRecord, ServiceRecord};
use crate::icons::ServiceIcon;
use crate::listing::outputs::{AppliedFilters, ProjectCard};

/// Message rendered by the fallback route
pub const NOT_FOUND_MESSAGE: &str = "Page not found";

/// Output from resolve_route
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolveRouteOutput {
    /// Normalized href that was resolved
    pub href: String,
    /// Route name, e.g. `projects` or `not_found`
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    /// Listing filters, for the projects route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<AppliedFilters>,
    /// Requested team anchor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Member the team page scrolls to; absent when the anchor is not rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResolveRouteOutput {
    pub fn new(href: String, route: &str) -> Self {
        Self {
            href,
            route: route.to_string(),
            redirect_to: None,
            filters: None,
            anchor: None,
            scroll_to: None,
            message: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Leadership entry on the landing and team pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl From<&MemberRecord> for MemberCard {
    fn from(member: &MemberRecord) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
            image: member.image.clone(),
            badge: member.badge.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Resolved icon name
    pub icon: String,
    pub glyph: String,
    pub features: Vec<String>,
}

impl From<&ServiceRecord> for ServiceCard {
    fn from(service: &ServiceRecord) -> Self {
        let icon = ServiceIcon::resolve(&service.icon);
        Self {
            id: service.id.clone(),
            title: service.title.clone(),
            description: service.description.clone(),
            icon: icon.to_string(),
            glyph: icon.glyph().to_string(),
            features: service.features.clone(),
        }
    }
}

/// Output from overview
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OverviewOutput {
    pub featured_projects: Vec<ProjectCard>,
    pub leadership: Vec<MemberCard>,
    pub services: Vec<ServiceCard>,
}

impl OverviewOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Error output for page tools
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PageErrorOutput {
    pub error: String,
}

impl PageErrorOutput {
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
