//! Record types for the studio content tables

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A portfolio project shown on the listing page and in suggestions
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectRecord {
    #[schemars(description = "Unique project identifier")]
    pub id: String,
    #[schemars(description = "URL-friendly identifier")]
    pub slug: String,
    pub title: String,
    #[schemars(description = "Service category, e.g. 'Interior Design'")]
    pub category: String,
    pub location: String,
    #[schemars(description = "Cover image reference")]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub work_scope: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectRecord {
    /// Lower-cased searchable text: title, description, category, location
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.category, self.location
        )
        .to_lowercase()
    }
}

/// Contact channels for a team member
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A studio team member
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MemberRecord {
    #[schemars(description = "Unique member identifier, also used as the team page anchor")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub is_founder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl MemberRecord {
    /// Lower-cased searchable text: name, role, expertise tags
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.role, self.expertise.join(" ")).to_lowercase()
    }

    /// Rank used for the leadership strip, or `None` if the member is not part of it
    pub fn leadership_rank(&self) -> Option<u8> {
        let role = self.role.trim().to_lowercase();
        let titled = matches!(role.as_str(), "founder" | "co-founder" | "cofounder" | "ceo");
        if !self.is_founder && !titled {
            return None;
        }

        let rank = if role.contains("founder") && !role.contains("co") {
            0
        } else if role.contains("co") && role.contains("founder") {
            1
        } else if role.contains("ceo") {
            2
        } else {
            3
        };
        Some(rank)
    }
}

/// A service offered by the studio
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ServiceRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[schemars(description = "Icon key, e.g. 'Home', 'Building', 'Wrench'")]
    pub icon: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// On-disk catalog file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogFile {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}
