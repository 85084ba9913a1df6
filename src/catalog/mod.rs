//! # Catalog Module
//!
//! Immutable content tables for the studio site: projects, team members and
//! services. A [`Catalog`] is built once by the composition root and shared
//! behind an `Arc`; nothing mutates it afterwards.
//!
//! ## Key Components
//!
//! - [`types`] - Record types and the on-disk catalog layout
//! - [`Catalog`] - Validated tables plus the derived views the pages use

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::icons::ServiceIcon;
pub use types::{CatalogFile, ContactInfo, MemberRecord, ProjectRecord, ServiceRecord, SocialLinks};

/// Catalog bundled with the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Validated, read-only content tables
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    members: Vec<MemberRecord>,
    services: Vec<ServiceRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers within any table
    pub fn new(
        projects: Vec<ProjectRecord>,
        members: Vec<MemberRecord>,
        services: Vec<ServiceRecord>,
    ) -> Result<Self> {
        ensure_unique("project", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("member", members.iter().map(|m| m.id.as_str()))?;
        ensure_unique("service", services.iter().map(|s| s.id.as_str()))?;

        for service in &services {
            if service.icon.parse::<ServiceIcon>().is_err() {
                tracing::warn!(
                    "Service '{}' uses unknown icon key '{}', the default icon will be shown",
                    service.id,
                    service.icon
                );
            }
        }

        Ok(Self {
            projects,
            members,
            services,
        })
    }

    /// The studio content shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("Failed to parse built-in catalog")
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("Invalid catalog JSON")?;
        Self::new(file.projects, file.members, file.services)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("Failed to load catalog file {}", path.display()))?;

        tracing::info!(
            "Loaded catalog from {} ({} projects, {} members, {} services)",
            path.display(),
            catalog.projects.len(),
            catalog.members.len(),
            catalog.services.len()
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Distinct project categories in first-appearance order
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|p| p.category.as_str()))
    }

    /// Distinct project locations in first-appearance order
    pub fn locations(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|p| p.location.as_str()))
    }

    /// Projects flagged for the landing page, in table order
    pub fn featured_projects(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Founders, co-founders and the CEO, in that order
    pub fn leadership(&self) -> Vec<&MemberRecord> {
        let mut ranked: Vec<(u8, &MemberRecord)> = self
            .members
            .iter()
            .filter_map(|m| m.leadership_rank().map(|rank| (rank, m)))
            .collect();
        // stable sort keeps table order within a rank
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, m)| m).collect()
    }
}

fn ensure_unique<'a>(table: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate {table} identifier '{id}'");
        }
    }
    Ok(())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn project(id: &str, title: &str, category: &str, location: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            slug: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            image: format!("/assets/{id}.jpg"),
            images: Vec::new(),
            description: format!("{title} project"),
            long_description: None,
            work_scope: Vec::new(),
            client_contact: None,
            completion_date: None,
            area: None,
            featured: false,
        }
    }

    pub fn member(id: &str, name: &str, role: &str, expertise: &[&str]) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            image: format!("/assets/team/{id}.jpg"),
            description: String::new(),
            expertise: expertise.iter().map(|e| e.to_string()).collect(),
            contact: ContactInfo::default(),
            social: None,
            is_founder: false,
            badge: None,
        }
    }
}
