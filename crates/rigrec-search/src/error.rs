use thiserror::Error;

/// Errors returned by the product-search API client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search API returned a non-OK `status` with a message.
    #[error("search API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
