pub mod app_config;
mod catalog;
mod config;
mod listing;
mod prefs;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, CatalogFile, CatalogListing};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::RawListing;
pub use prefs::{BudgetRange, PriceBand, StorageTier, UserPreferences};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
