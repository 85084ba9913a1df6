//! Listing recomputation from the filter state

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ProjectRecord};
use crate::listing::params::{ALL, FilterState, Selector, slugify};

/// Message rendered when no project survives the filters
pub const EMPTY_LISTING_MESSAGE: &str = "No projects found";

/// Projects visible on the listing page for a filter state
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub filter: FilterState,
    pub projects: Vec<&'a ProjectRecord>,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

/// Apply category, location and search filters in that order, AND-combined
///
/// Unknown category or location values simply match nothing.
pub fn filter_projects<'a>(catalog: &'a Catalog, filter: &FilterState) -> Listing<'a> {
    let projects = catalog
        .projects()
        .iter()
        .filter(|p| match &filter.category {
            Selector::All => true,
            Selector::Only(slug) => slugify(&p.category) == *slug,
        })
        .filter(|p| match &filter.location {
            Selector::All => true,
            Selector::Only(location) => p.location == *location,
        })
        .filter(|p| filter.search.is_empty() || p.haystack().contains(&filter.search))
        .collect();

    Listing {
        filter: filter.clone(),
        projects,
    }
}

/// One entry in a selector control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    /// Value written to the URL
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

/// Choices offered by the category and location selectors, `all` first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOptions {
    pub categories: Vec<SelectorOption>,
    pub locations: Vec<SelectorOption>,
}

impl ListingOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let all = |label: &str| SelectorOption {
            value: ALL.to_string(),
            label: label.to_string(),
        };

        let categories = std::iter::once(all("All Categories"))
            .chain(catalog.categories().into_iter().map(|c| SelectorOption {
                value: slugify(c),
                label: c.to_string(),
            }))
            .collect();

        let locations = std::iter::once(all("All Locations"))
            .chain(catalog.locations().into_iter().map(|l| SelectorOption {
                value: l.to_string(),
                label: l.to_string(),
            }))
            .collect();

        Self {
            categories,
            locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::params::ListingParams;

    fn ids(listing: &Listing<'_>) -> Vec<String> {
        listing.projects.iter().map(|p| p.id.clone()).collect()
    }

    fn run(catalog: &Catalog, query: &str) -> Vec<String> {
        ids(&filter_projects(catalog, &ListingParams::parse(query).filter_state()))
    }

    #[test]
    fn test_unfiltered_listing_shows_everything() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(run(&catalog, "").len(), catalog.projects().len());
    }

    #[test]
    fn test_search_villa_returns_both_villas() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(run(&catalog, "search=villa"), vec!["home-dharmendra", "home-pradeep"]);
    }

    #[test]
    fn test_category_accepts_label_and_slug() {
        let catalog = Catalog::builtin().unwrap();
        let expected = vec!["pcp-sikar", "foyer"];
        assert_eq!(run(&catalog, "filter=Interior+Design"), expected);
        assert_eq!(run(&catalog, "filter=interior-design"), expected);
        assert_eq!(run(&catalog, "filter=3d-visualization"), vec!["home-dharmendra"]);
    }

    #[test]
    fn test_location_is_exact() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(run(&catalog, "location=Jagatpura"), vec!["home-dharmendra", "home-pradeep"]);
        assert!(run(&catalog, "location=jagatpura").is_empty());
    }

    #[test]
    fn test_filters_are_and_combined() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            run(&catalog, "filter=consultation&location=Jagatpura&search=villa"),
            vec!["home-pradeep"]
        );
        assert!(run(&catalog, "filter=construction&search=villa").is_empty());
    }

    #[test]
    fn test_unknown_values_yield_empty_listing() {
        let catalog = Catalog::builtin().unwrap();
        let listing = filter_projects(
            &catalog,
            &ListingParams::parse("filter=landscaping").filter_state(),
        );
        assert!(listing.is_empty());
        assert!(run(&catalog, "location=Udaipur").is_empty());
    }

    #[test]
    fn test_options_start_with_all() {
        let catalog = Catalog::builtin().unwrap();
        let options = ListingOptions::from_catalog(&catalog);

        assert_eq!(options.categories[0].value, "all");
        assert_eq!(options.categories.len(), catalog.categories().len() + 1);
        assert_eq!(
            options.categories[1],
            SelectorOption {
                value: "interior-design".to_string(),
                label: "Interior Design".to_string(),
            }
        );
        assert_eq!(options.locations[0].label, "All Locations");
        assert_eq!(options.locations.last().unwrap().value, "Tonk Phatak");
    }
}
