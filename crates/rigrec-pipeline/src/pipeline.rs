//! Pipeline orchestration: structure → filter → score → rank → truncate.

use rigrec_core::{RawListing, UserPreferences};

use crate::filter::is_eligible;
use crate::score::score_listing;
use crate::structure::structure_listing;
use crate::types::Recommendation;

/// Caller-tunable knobs for one `recommend` invocation.
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    /// Maximum number of recommendations returned.
    pub limit: usize,
    /// Fractional widening applied to the budget interval when filtering.
    pub budget_tolerance: f64,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            budget_tolerance: 0.12,
        }
    }
}

/// Runs the full pipeline over one candidate list.
///
/// Candidates that fail mandatory-field extraction or any filter stage are
/// dropped silently. Survivors are scored, sorted descending by score
/// (ties keep first-seen order — the sort is stable and no secondary key is
/// defined), and truncated to `options.limit`.
///
/// Pure and idempotent: identical inputs yield identical output, and an
/// empty or fully-filtered candidate list yields an empty result rather
/// than an error.
#[must_use]
pub fn recommend(
    candidates: &[RawListing],
    preferences: &UserPreferences,
    options: &RecommendOptions,
) -> Vec<Recommendation> {
    let band = preferences.budget.price_band();

    let structured: Vec<_> = candidates.iter().filter_map(structure_listing).collect();
    tracing::debug!(
        candidates = candidates.len(),
        structured = structured.len(),
        "structured raw candidates"
    );

    let mut recommendations: Vec<Recommendation> = structured
        .into_iter()
        .filter(|listing| is_eligible(listing, preferences, options.budget_tolerance))
        .map(|listing| score_listing(listing, band))
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(options.limit);

    tracing::debug!(
        returned = recommendations.len(),
        limit = options.limit,
        "ranked eligible listings"
    );
    recommendations
}
