use serde::{Deserialize, Serialize};

/// A product record as returned by the upstream search, before any
/// extraction or validation has run.
///
/// Nothing beyond field presence is guaranteed: the title is free text, the
/// price may be missing, and the URL doubles as the listing's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub title: String,
    pub url: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}
