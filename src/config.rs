//! Runtime configuration
//!
//! Resolves where the catalog comes from and how long the debouncer waits.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::search::config::DEFAULT_DEBOUNCE_MS;

/// Catalog file name looked up in the user config directory
const CATALOG_FILE_NAME: &str = "catalog.json";

/// Where the catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    pub catalog: CatalogSource,
    pub debounce: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Builtin,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl StudioConfig {
    /// Resolve configuration from an explicit catalog path and debounce interval
    ///
    /// Without an explicit path, `<config dir>/studio-search/catalog.json` is
    /// used if it exists, otherwise the built-in catalog.
    pub fn resolve(catalog_path: Option<PathBuf>, debounce_ms: u64) -> Self {
        let catalog = match catalog_path.or_else(user_catalog_path) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Builtin,
        };

        Self {
            catalog,
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            CatalogSource::File(path) => Catalog::load(path),
            CatalogSource::Builtin => {
                tracing::info!("Using built-in catalog");
                Catalog::builtin()
            }
        }
    }
}

/// Default per-user catalog location, whether or not it exists
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Failed to get config directory")?
        .join("studio-search")
        .join(CATALOG_FILE_NAME))
}

fn user_catalog_path() -> Option<PathBuf> {
    default_catalog_path().ok().filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let config = StudioConfig::resolve(Some(PathBuf::from("/tmp/custom.json")), 100);
        assert_eq!(
            config.catalog,
            CatalogSource::File(PathBuf::from("/tmp/custom.json"))
        );
        assert_eq!(config.debounce, Duration::from_millis(100));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{"projects": [], "members": [], "services": []}"#).unwrap();

        let config = StudioConfig::resolve(Some(path), DEFAULT_DEBOUNCE_MS);
        let catalog = config.load_catalog().unwrap();
        assert!(catalog.projects().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = StudioConfig::resolve(Some(temp_dir.path().join("absent.json")), 250);
        let err = config.load_catalog().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read catalog file"));
    }

    #[test]
    fn test_default_uses_builtin() {
        let config = StudioConfig::default();
        assert_eq!(config.catalog, CatalogSource::Builtin);
        assert_eq!(config.load_catalog().unwrap().projects().len(), 6);
    }
}
