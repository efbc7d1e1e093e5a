use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, RawListing};

/// One static candidate in the fallback catalog.
///
/// Unlike [`RawListing`], prices here are required: the catalog is curated
/// by hand and an entry without a price would never survive the pipeline's
/// mandatory-field gate anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListing {
    pub title: String,
    pub url: String,
    pub price: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub listings: Vec<CatalogListing>,
}

impl CatalogFile {
    /// Converts the catalog into the same shape the upstream search returns,
    /// so the rest of the pipeline cannot tell fallback data apart.
    #[must_use]
    pub fn raw_listings(&self) -> Vec<RawListing> {
        self.listings
            .iter()
            .map(|entry| RawListing {
                title: entry.title.clone(),
                url: entry.url.clone(),
                price: Some(entry.price),
                image_url: entry.image_url.clone(),
            })
            .collect()
    }
}

/// Load and validate the fallback catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

fn parse_catalog(content: &str) -> Result<CatalogFile, ConfigError> {
    let catalog: CatalogFile = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    if catalog.listings.is_empty() {
        return Err(ConfigError::Validation(
            "fallback catalog must contain at least one listing".to_string(),
        ));
    }

    let mut seen_urls = HashSet::new();
    for entry in &catalog.listings {
        if entry.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "catalog entry '{}' has an empty title",
                entry.url
            )));
        }
        if entry.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "catalog entry '{}' has an empty url",
                entry.title
            )));
        }
        if !entry.price.is_finite() || entry.price <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "catalog entry '{}' has invalid price {}",
                entry.url, entry.price
            )));
        }
        if !seen_urls.insert(entry.url.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate catalog url: {}",
                entry.url
            )));
        }
    }

    Ok(())
}
