//! Client-side route table
//!
//! Hrefs are parsed into a [`Location`] (path, listing parameters, fragment)
//! and resolved to a [`Route`]. Alias paths redirect to the root and unknown
//! paths resolve to [`Route::NotFound`], which is only a rendered message.

use std::fmt;

use anyhow::{Context, Result};
use url::Url;

use crate::catalog::{Catalog, MemberRecord};
use crate::listing::params::{FilterState, ListingParams};

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";
pub const PROJECTS_PATH: &str = "/projects";
pub const TEAM_PATH: &str = "/team";
pub const CONTACT_PATH: &str = "/contact";

/// Paths that permanently redirect to the root route
const ROOT_ALIASES: &[&str] = &["/home", "/index.html"];

/// Base used to resolve relative hrefs; never shown to users
const BASE_URL: &str = "http://studio.local/";

/// A parsed in-app href
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: ListingParams,
    fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: ListingParams::new(),
            fragment: None,
        }
    }

    /// The listing view with the given parameters
    pub fn listing(params: ListingParams) -> Self {
        Self::new(PROJECTS_PATH).with_params(params)
    }

    /// The team page scrolled to a member anchor
    pub fn team_member(member_id: &str) -> Self {
        Self::new(TEAM_PATH).with_fragment(member_id)
    }

    /// Parse an absolute path such as `/projects?filter=construction#top`
    pub fn parse(href: &str) -> Result<Self> {
        let base = Url::parse(BASE_URL).context("Invalid base URL")?;
        let url = base
            .join(href.trim())
            .with_context(|| format!("Invalid href: {href}"))?;

        let path = match url.path().trim_end_matches('/') {
            "" => HOME_PATH.to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            path,
            params: ListingParams::parse(url.query().unwrap_or_default()),
            fragment: url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        })
    }

    pub fn with_params(mut self, params: ListingParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &ListingParams {
        &self.params
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether this location is the project listing view
    pub fn is_listing(&self) -> bool {
        self.path == PROJECTS_PATH || self.path.starts_with("/projects/")
    }

    pub fn to_href(&self) -> String {
        let mut href = self.path.clone();
        if !self.params.is_empty() {
            href.push('?');
            href.push_str(&self.params.to_query_string());
        }
        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_href())
    }
}

/// A pending navigation to `location`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: Location,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Navigation {
    pub fn push(location: Location) -> Self {
        Self {
            location,
            replace: false,
        }
    }

    pub fn replace(location: Location) -> Self {
        Self {
            location,
            replace: true,
        }
    }
}

/// The view a location renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects(FilterState),
    Team { anchor: Option<String> },
    Contact,
    /// Permanent client-side redirect
    Redirect(String),
    NotFound,
}

impl Route {
    pub fn resolve(location: &Location) -> Self {
        let route = match location.path() {
            HOME_PATH => Route::Home,
            ABOUT_PATH => Route::About,
            PROJECTS_PATH => Route::Projects(location.params().filter_state()),
            TEAM_PATH => Route::Team {
                anchor: location.fragment().map(str::to_string),
            },
            CONTACT_PATH => Route::Contact,
            path if ROOT_ALIASES.contains(&path) => Route::Redirect(HOME_PATH.to_string()),
            _ => Route::NotFound,
        };
        tracing::debug!("Resolved {} to {}", location, route.name());
        route
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Projects(_) => "projects",
            Route::Team { .. } => "team",
            Route::Contact => "contact",
            Route::Redirect(_) => "redirect",
            Route::NotFound => "not_found",
        }
    }
}

/// Member the team page should scroll to, if the anchor names a rendered member
pub fn team_anchor<'a>(catalog: &'a Catalog, anchor: Option<&str>) -> Option<&'a MemberRecord> {
    let anchor = anchor?;
    let member = catalog.leadership().into_iter().find(|m| m.id == anchor);
    if member.is_none() {
        tracing::debug!("Team anchor '{}' not rendered, not scrolling", anchor);
    }
    member
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::params::Selector;

    fn resolve(href: &str) -> Route {
        Route::resolve(&Location::parse(href).unwrap())
    }

    #[test]
    fn test_primary_routes() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve(""), Route::Home);
        assert_eq!(resolve("/about"), Route::About);
        assert_eq!(resolve("/contact/"), Route::Contact);
        assert_eq!(resolve("/team"), Route::Team { anchor: None });
    }

    #[test]
    fn test_root_aliases_redirect() {
        assert_eq!(resolve("/home"), Route::Redirect("/".to_string()));
        assert_eq!(resolve("/index.html"), Route::Redirect("/".to_string()));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(resolve("/blog"), Route::NotFound);
        assert_eq!(resolve("/projects-archive"), Route::NotFound);
    }

    #[test]
    fn test_projects_route_carries_filter_state() {
        match resolve("/projects?filter=Construction&location=Jaipur&search=School") {
            Route::Projects(state) => {
                assert_eq!(state.category, Selector::Only("construction".to_string()));
                assert_eq!(state.location, Selector::Only("Jaipur".to_string()));
                assert_eq!(state.search, "school");
            }
            other => panic!("expected projects route, got {other:?}"),
        }
    }

    #[test]
    fn test_team_anchor_from_fragment() {
        assert_eq!(
            resolve("/team#pooja-sain"),
            Route::Team {
                anchor: Some("pooja-sain".to_string())
            }
        );
    }

    #[test]
    fn test_href_round_trip() {
        let location = Location::parse("/projects?filter=construction&search=luxury+villa").unwrap();
        assert!(location.is_listing());
        assert_eq!(
            location.to_href(),
            "/projects?filter=construction&search=luxury+villa"
        );
        assert_eq!(Location::team_member("founder").to_href(), "/team#founder");
        assert_eq!(Location::listing(ListingParams::new()).to_href(), "/projects");
    }

    #[test]
    fn test_team_anchor_lookup() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            team_anchor(&catalog, Some("co-founder")).map(|m| m.name.as_str()),
            Some("Kamal Rajoriya")
        );
        assert!(team_anchor(&catalog, Some("intern")).is_none());
        assert!(team_anchor(&catalog, None).is_none());
    }
}
