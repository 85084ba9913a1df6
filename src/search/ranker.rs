//! Suggestion ranking
//!
//! Matching is plain substring containment against each record's haystack.
//! There is no scoring: matches keep table order, projects come before team
//! members, and the per-kind and total caps from [`config`](super::config)
//! truncate the list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MemberRecord, ProjectRecord};
use crate::search::config::{MAX_PROJECT_SUGGESTIONS, MAX_SUGGESTIONS, MAX_TEAM_SUGGESTIONS};

/// A single entry in the suggestion dropdown
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Suggestion {
    Project { project_id: String, title: String },
    Team {
        member_id: String,
        name: String,
        role: String,
    },
}

impl Suggestion {
    fn from_project(project: &ProjectRecord) -> Self {
        Suggestion::Project {
            project_id: project.id.clone(),
            title: project.title.clone(),
        }
    }

    fn from_member(member: &MemberRecord) -> Self {
        Suggestion::Team {
            member_id: member.id.clone(),
            name: member.name.clone(),
            role: member.role.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Suggestion::Project { .. } => "project",
            Suggestion::Team { .. } => "team",
        }
    }

    /// Text shown for the entry and copied into the search box on selection
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Project { title, .. } => title,
            Suggestion::Team { name, .. } => name,
        }
    }
}

/// Normalize raw input into a settled query
pub fn settle(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Compute the suggestion list for a query
///
/// The query is settled first, so callers may pass raw input. An empty query
/// yields an empty list rather than matching everything.
pub fn suggest(query: &str, catalog: &Catalog) -> Vec<Suggestion> {
    let q = settle(query);
    if q.is_empty() {
        return Vec::new();
    }

    let projects = catalog
        .projects()
        .iter()
        .filter(|p| p.haystack().contains(&q))
        .take(MAX_PROJECT_SUGGESTIONS)
        .map(Suggestion::from_project);

    let team = catalog
        .members()
        .iter()
        .filter(|m| m.haystack().contains(&q))
        .take(MAX_TEAM_SUGGESTIONS)
        .map(Suggestion::from_member);

    projects.chain(team).take(MAX_SUGGESTIONS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{member, project};

    fn wide_catalog() -> Catalog {
        let projects = (0..6)
            .map(|i| project(&format!("p{i}"), &format!("Loft {i}"), "Renovation", "Jaipur"))
            .collect();
        let members = (0..5)
            .map(|i| member(&format!("m{i}"), &format!("Member {i}"), "Designer", &["Loft Design"]))
            .collect();
        Catalog::new(projects, members, Vec::new()).unwrap()
    }

    #[test]
    fn test_settle_trims_and_lowercases() {
        assert_eq!(settle("  ViLLa \t"), "villa");
        assert_eq!(settle("   "), "");
    }

    #[test]
    fn test_empty_query_yields_no_suggestions() {
        let catalog = Catalog::builtin().unwrap();
        assert!(suggest("", &catalog).is_empty());
        assert!(suggest("    ", &catalog).is_empty());
    }

    #[test]
    fn test_team_only_match() {
        let catalog = Catalog::builtin().unwrap();
        let suggestions = suggest("nik", &catalog);
        assert_eq!(
            suggestions,
            vec![Suggestion::Team {
                member_id: "founder".to_string(),
                name: "Nikhil Sain".to_string(),
                role: "Founder & Lead Designer".to_string(),
            }]
        );
    }

    #[test]
    fn test_projects_precede_team_members() {
        let catalog = Catalog::builtin().unwrap();
        // "3d visualization" is a project category and an expertise tag
        let kinds: Vec<&str> = suggest("3D Visualization", &catalog)
            .iter()
            .map(Suggestion::kind)
            .collect();
        assert_eq!(kinds, vec!["project", "team", "team"]);
    }

    #[test]
    fn test_caps_apply_per_kind_and_in_total() {
        let catalog = wide_catalog();
        let suggestions = suggest("loft", &catalog);

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        let projects: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind() == "project")
            .map(Suggestion::label)
            .collect();
        let team: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.kind() == "team")
            .map(Suggestion::label)
            .collect();
        // 4 projects + 3 members would be 7, so the last member is dropped
        assert_eq!(projects, vec!["Loft 0", "Loft 1", "Loft 2", "Loft 3"]);
        assert_eq!(team, vec!["Member 0", "Member 1"]);
    }

    #[test]
    fn test_every_suggestion_matches_its_haystack() {
        let catalog = Catalog::builtin().unwrap();
        for query in ["design", "jaipur", "a", "consult", "sain"] {
            for suggestion in suggest(query, &catalog) {
                let haystack = match &suggestion {
                    Suggestion::Project { project_id, .. } => {
                        catalog.project(project_id).unwrap().haystack()
                    }
                    Suggestion::Team { member_id, .. } => {
                        catalog.member(member_id).unwrap().haystack()
                    }
                };
                assert!(haystack.contains(query), "{query} not in {haystack}");
            }
        }
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(suggest("skyscraper", &catalog).is_empty());
    }

    #[test]
    fn test_suggestion_serialization_is_tagged() {
        let suggestion = Suggestion::Project {
            project_id: "foyer".to_string(),
            title: "Foyer".to_string(),
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "project");
        assert_eq!(json["project_id"], "foyer");
    }
}
