use serde::{Deserialize, Serialize};

/// Storage hardware family inferred from a title.
///
/// `Unknown` means a size was found but no SSD/HDD keyword accompanied it;
/// it is distinct from "no storage information at all", which the listing
/// represents with `None` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Ssd,
    Hdd,
    Unknown,
}

impl StorageKind {
    /// Display word used in recommendation reason lines. An unknown kind
    /// reads as the literal word "Storage".
    #[must_use]
    pub fn reason_label(self) -> &'static str {
        match self {
            StorageKind::Ssd => "SSD",
            StorageKind::Hdd => "HDD",
            StorageKind::Unknown => "Storage",
        }
    }
}

/// A listing after successful mandatory-field extraction.
///
/// Only constructible (via [`crate::structure_listing`]) when title, URL,
/// price, CPU, and RAM were all extracted — a failed mandatory field yields
/// no listing at all, never a listing with a hole in it. Optional fields use
/// `None` for absence; zero is never a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredListing {
    /// The listing URL doubles as its unique id.
    pub id: String,
    pub title: String,
    pub url: String,
    pub price: f64,
    pub image_url: Option<String>,
    /// Short CPU label, e.g. `"Intel Core i7"`.
    pub cpu: String,
    /// Brand-prefixed GPU label, e.g. `"NVIDIA GeForce RTX 4070"`.
    pub gpu: Option<String>,
    pub ram_gb: u32,
    pub storage_gb: Option<u32>,
    pub storage_kind: Option<StorageKind>,
}

/// One scored, ranked pipeline output.
///
/// The reason strings justify the score for display; they play no part in
/// ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub listing: StructuredListing,
    pub score: f64,
    pub reasons: Vec<String>,
}
