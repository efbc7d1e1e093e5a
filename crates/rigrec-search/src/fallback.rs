//! Best-effort candidate fetching with fallback substitution.
//!
//! The upstream search is the only slow, failure-prone step in a request.
//! Any failure — missing API key, network error, API-level error, bad
//! payload — degrades to the static catalog instead of surfacing an error,
//! and the substitution is flagged so callers can tell the user.

use rigrec_core::{CatalogFile, PriceBand, RawListing};

use crate::client::SearchClient;

/// The candidates one pipeline invocation will consume, plus whether they
/// came from the fallback catalog rather than a live search.
#[derive(Debug)]
pub struct CandidateSet {
    pub listings: Vec<RawListing>,
    pub from_fallback: bool,
}

/// Fetches candidates from the upstream search, substituting the fallback
/// catalog when no client is configured or the single best-effort call
/// fails for any reason.
pub async fn fetch_candidates(
    client: Option<&SearchClient>,
    catalog: &CatalogFile,
    phrase: &str,
    band: PriceBand,
    cap: usize,
) -> CandidateSet {
    let Some(client) = client else {
        tracing::warn!("no search API key configured; using fallback catalog");
        return fallback_set(catalog);
    };

    match client.search_desktops(phrase, band, cap).await {
        Ok(listings) if !listings.is_empty() => {
            tracing::debug!(count = listings.len(), "upstream search returned candidates");
            CandidateSet {
                listings,
                from_fallback: false,
            }
        }
        Ok(_) => {
            tracing::warn!(phrase, "upstream search returned no products; using fallback catalog");
            fallback_set(catalog)
        }
        Err(e) => {
            tracing::warn!(error = %e, phrase, "upstream search failed; using fallback catalog");
            fallback_set(catalog)
        }
    }
}

fn fallback_set(catalog: &CatalogFile) -> CandidateSet {
    CandidateSet {
        listings: catalog.raw_listings(),
        from_fallback: true,
    }
}
