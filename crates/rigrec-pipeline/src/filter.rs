//! Eligibility filtering: data-quality gate, then budget, then storage.
//!
//! Each stage answers a yes/no question; a listing rejected by any stage is
//! dropped silently. Rejection reasons exist only as the boolean outcome —
//! nothing downstream consumes them.

use rigrec_core::{PriceBand, UserPreferences};

use crate::types::StructuredListing;

/// Minimum data-quality gate, independent of user preferences.
///
/// By construction every [`StructuredListing`] already satisfies this, but
/// the check stands on its own so callers holding listings from elsewhere
/// (tests, fixtures) get the same gate.
#[must_use]
pub fn meets_mandatory_fields(listing: &StructuredListing) -> bool {
    listing.price.is_finite()
        && listing.price > 0.0
        && !listing.url.is_empty()
        && !listing.cpu.is_empty()
        && listing.ram_gb > 0
}

/// Whether `price` falls inside the preference band after widening it by
/// `tolerance`, inclusive of both ends.
#[must_use]
pub fn within_budget(price: f64, band: PriceBand, tolerance: f64) -> bool {
    band.widened(tolerance).contains(price)
}

/// Storage constraint check.
///
/// A listing whose title disclosed no storage size passes even when a
/// minimum is set: missing data is not disqualifying, since over-filtering
/// listings that simply omitted storage info was judged worse than
/// occasionally surfacing one.
#[must_use]
pub fn meets_storage_minimum(storage_gb: Option<u32>, required_min_gb: Option<u32>) -> bool {
    match (required_min_gb, storage_gb) {
        (None, _) | (Some(_), None) => true,
        (Some(min), Some(gb)) => gb >= min,
    }
}

/// Runs the three filter stages in sequence.
#[must_use]
pub fn is_eligible(
    listing: &StructuredListing,
    preferences: &UserPreferences,
    tolerance: f64,
) -> bool {
    meets_mandatory_fields(listing)
        && within_budget(listing.price, preferences.budget.price_band(), tolerance)
        && meets_storage_minimum(listing.storage_gb, preferences.storage.min_storage_gb())
}
