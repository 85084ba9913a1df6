//! Service icon mapping
//!
//! Service records name their icon with a string key. Keys map onto a closed
//! set of icons; an unknown key resolves to [`ServiceIcon::LayoutDashboard`]
//! and is reported instead of silently rendering something else.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceIcon {
    Home,
    Building,
    Wrench,
    MessageCircle,
    Eye,
    LayoutDashboard,
}

impl ServiceIcon {
    /// Icon used when a key does not name a known icon
    pub const DEFAULT: ServiceIcon = ServiceIcon::LayoutDashboard;

    /// Resolve an icon key, falling back to [`Self::DEFAULT`]
    pub fn resolve(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown icon key '{}', using {}", key, Self::DEFAULT);
            Self::DEFAULT
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceIcon::Home => "Home",
            ServiceIcon::Building => "Building",
            ServiceIcon::Wrench => "Wrench",
            ServiceIcon::MessageCircle => "MessageCircle",
            ServiceIcon::Eye => "Eye",
            ServiceIcon::LayoutDashboard => "LayoutDashboard",
        }
    }

    /// Text glyph used when rendering to a terminal
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Home => "⌂",
            ServiceIcon::Building => "▦",
            ServiceIcon::Wrench => "⚒",
            ServiceIcon::MessageCircle => "✉",
            ServiceIcon::Eye => "◉",
            ServiceIcon::LayoutDashboard => "▤",
        }
    }
}

impl FromStr for ServiceIcon {
    type Err = anyhow::Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "Home" => Ok(ServiceIcon::Home),
            "Building" => Ok(ServiceIcon::Building),
            "Wrench" => Ok(ServiceIcon::Wrench),
            "MessageCircle" => Ok(ServiceIcon::MessageCircle),
            "Eye" => Ok(ServiceIcon::Eye),
            "LayoutDashboard" => Ok(ServiceIcon::LayoutDashboard),
            _ => Err(anyhow!("unknown icon key '{key}'")),
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
