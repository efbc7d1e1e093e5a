//! HTTP client for the product-search API.
//!
//! Wraps `reqwest` with search-specific error handling, API key management,
//! and typed response deserialization. The single endpoint checks the
//! `"status"` field in the JSON envelope and surfaces API-level errors as
//! [`SearchError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use rigrec_core::{PriceBand, RawListing};

use crate::error::SearchError;
use crate::types::SearchEnvelope;

const DEFAULT_BASE_URL: &str = "https://api.product-search.dev/";
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the product-search API.
///
/// Manages the HTTP client, API key, and base URL. Use [`SearchClient::new`]
/// for production or [`SearchClient::with_base_url`] to point at a mock
/// server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock, or a self-hosted proxy).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("rigrec/0.1 (desktop-recommendations)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined paths land under the root rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SearchError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for desktop listings matching `phrase`, bounded by the
    /// given price band, returning at most `cap` raw listings.
    ///
    /// The band's ends become the upstream `min_price`/`max_price` bounds;
    /// an unbounded band sends no `max_price`. Records come back in the
    /// upstream's relevance order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Api`] if the API returns a non-OK status.
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_desktops(
        &self,
        phrase: &str,
        band: PriceBand,
        cap: usize,
    ) -> Result<Vec<RawListing>, SearchError> {
        let url = self.build_url(phrase, band);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
                context: format!("search(phrase={phrase})"),
                source: e,
            })?;

        Ok(envelope
            .data
            .products
            .into_iter()
            .take(cap)
            .map(crate::types::ProductRecord::into_raw_listing)
            .collect())
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(&self, phrase: &str, band: PriceBand) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("search");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", phrase);
            pairs.append_pair("country", "US");
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if band.min > 0.0 {
                pairs.append_pair("min_price", &(band.min as u64).to_string());
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(max) = band.max {
                pairs.append_pair("max_price", &(max as u64).to_string());
            }
        }
        url
    }

    /// Sends a GET request with the API key header, asserts a 2xx HTTP
    /// status, and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on network failure or a non-2xx status.
    /// Returns [`SearchError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SearchError> {
        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SearchError> {
        let status = body.get("status").and_then(serde_json::Value::as_str);
        if status.is_some_and(|s| !s.eq_ignore_ascii_case("ok")) {
            let msg = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(SearchError::Api(msg));
        }
        Ok(())
    }
}
