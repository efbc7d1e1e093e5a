//! Structural conversion from raw search records to [`StructuredListing`].
//!
//! Spec extraction is delegated to [`crate::extract`]; this module enforces
//! the construction invariant: a listing exists only when every mandatory
//! field (title, URL, price, CPU, RAM) was recovered.

use rigrec_core::RawListing;

use crate::extract::{extract_cpu, extract_gpu, extract_ram_gb, extract_storage};
use crate::types::StructuredListing;

/// Builds a [`StructuredListing`] from a raw record, or `None` when any
/// mandatory field is missing or unusable.
///
/// Mandatory: non-empty title and URL, a finite positive price, an
/// extractable CPU label, and an extractable RAM size. GPU and storage are
/// best-effort extras.
#[must_use]
pub fn structure_listing(raw: &RawListing) -> Option<StructuredListing> {
    if raw.title.trim().is_empty() || raw.url.trim().is_empty() {
        return None;
    }
    let price = raw.price.filter(|p| p.is_finite() && *p > 0.0)?;
    let cpu = extract_cpu(&raw.title)?;
    let ram_gb = extract_ram_gb(&raw.title)?;

    let gpu = extract_gpu(&raw.title);
    let (storage_gb, storage_kind) = match extract_storage(&raw.title) {
        Some((gb, kind)) => (Some(gb), Some(kind)),
        None => (None, None),
    };

    Some(StructuredListing {
        id: raw.url.clone(),
        title: raw.title.clone(),
        url: raw.url.clone(),
        price,
        image_url: raw.image_url.clone(),
        cpu,
        gpu,
        ram_gb,
        storage_gb,
        storage_kind,
    })
}
