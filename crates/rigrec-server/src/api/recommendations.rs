use axum::{
    extract::{Query, State},
    Extension, Json,
};
use rigrec_core::{BudgetRange, StorageTier, UserPreferences};
use rigrec_pipeline::{recommend, Recommendation, RecommendOptions};
use rigrec_search::fetch_candidates;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RecommendationQuery {
    pub budget: Option<String>,
    pub storage: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct RecommendationData {
    recommendations: Vec<Recommendation>,
    /// True when the upstream search failed (or was unconfigured) and the
    /// static catalog was substituted.
    fallback_used: bool,
    /// Raw candidates considered before filtering.
    candidate_count: usize,
    budget: BudgetRange,
    storage: StorageTier,
}

/// `GET /api/v1/recommendations?budget=&storage=&limit=`
///
/// Missing or unrecognized preference values fall back to documented
/// defaults rather than erroring, so the endpoint is total over junk query
/// strings. The limit is clamped to the configured default's range.
pub(super) async fn get_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> Json<ApiResponse<RecommendationData>> {
    let preferences = UserPreferences {
        budget: BudgetRange::parse_or_default(query.budget.as_deref()),
        storage: StorageTier::parse_or_default(query.storage.as_deref()),
    };
    let limit = query
        .limit
        .unwrap_or(state.config.result_limit)
        .clamp(1, 50);

    let band = preferences.budget.price_band();
    let candidates = fetch_candidates(
        state.search.as_deref(),
        &state.catalog,
        &state.config.search_phrase,
        band,
        state.config.search_result_cap,
    )
    .await;

    let options = RecommendOptions {
        limit,
        budget_tolerance: state.config.budget_tolerance,
    };
    let recommendations = recommend(&candidates.listings, &preferences, &options);

    tracing::info!(
        budget = %preferences.budget,
        storage = %preferences.storage,
        candidates = candidates.listings.len(),
        returned = recommendations.len(),
        fallback = candidates.from_fallback,
        "served recommendations"
    );

    Json(ApiResponse {
        data: RecommendationData {
            recommendations,
            fallback_used: candidates.from_fallback,
            candidate_count: candidates.listings.len(),
            budget: preferences.budget,
            storage: preferences.storage,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
