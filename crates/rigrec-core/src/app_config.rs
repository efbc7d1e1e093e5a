use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub catalog_path: PathBuf,
    /// API key for the upstream product-search service. When absent the
    /// server runs entirely off the fallback catalog.
    pub search_api_key: Option<String>,
    /// Override for the search service base URL (tests, self-hosted proxies).
    pub search_base_url: Option<String>,
    pub search_timeout_secs: u64,
    /// Free-text phrase sent to the upstream search.
    pub search_phrase: String,
    /// Maximum number of raw candidates requested per search.
    pub search_result_cap: usize,
    /// Fractional widening applied to the selected budget interval.
    pub budget_tolerance: f64,
    /// Default number of recommendations returned.
    pub result_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_base_url", &self.search_base_url)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("search_phrase", &self.search_phrase)
            .field("search_result_cap", &self.search_result_cap)
            .field("budget_tolerance", &self.budget_tolerance)
            .field("result_limit", &self.result_limit)
            .finish()
    }
}
