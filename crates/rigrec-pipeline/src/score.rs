//! Component quality tiers and the composite desirability score.
//!
//! Tiers are small integers inferred from labels; the composite is a
//! weighted sum scaled to roughly 0–100 with a budget-proximity term. Only
//! relative ordering matters, not the exact ceiling.

use std::sync::LazyLock;

use regex::Regex;
use rigrec_core::PriceBand;

use crate::types::{Recommendation, StorageKind, StructuredListing};

// Whole-word digit matches, most significant first, so "i9" is never
// mistaken for "i3".
static CORE_I_TIERS: LazyLock<Vec<(Regex, u8)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)\bi9\b").expect("valid i9 regex"), 5),
        (Regex::new(r"(?i)\bi7\b").expect("valid i7 regex"), 4),
        (Regex::new(r"(?i)\bi5\b").expect("valid i5 regex"), 3),
        (Regex::new(r"(?i)\bi3\b").expect("valid i3 regex"), 2),
    ]
});

static RYZEN_TIERS: LazyLock<Vec<(Regex, u8)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)\bryzen\s?9\b").expect("valid ryzen 9 regex"), 5),
        (Regex::new(r"(?i)\bryzen\s?7\b").expect("valid ryzen 7 regex"), 4),
        (Regex::new(r"(?i)\bryzen\s?5\b").expect("valid ryzen 5 regex"), 3),
        (Regex::new(r"(?i)\bryzen\s?3\b").expect("valid ryzen 3 regex"), 2),
    ]
});

static INTEGRATED_GPU: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\buhd\b|\biris\b|\bxe\b|intel\s+graphics|radeon\s+graphics")
        .expect("valid integrated gpu regex")
});

static RTX_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brtx\s?(\d{4})\b").expect("valid rtx model regex"));
static GTX_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bgtx\s?(\d{4})\b").expect("valid gtx model regex"));
static RX_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\brx\s?(\d{4})\b").expect("valid rx model regex"));
static ARC_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\barc\s?a(\d{3})\b").expect("valid arc model regex"));

static GPU_BRAND_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:nvidia|geforce|radeon|rtx|gtx|arc)\b")
        .expect("valid gpu brand regex")
});

/// CPU quality tier, 1–5. Unrecognized labels land on 2 rather than 0: a
/// listing that cleared extraction names *some* real CPU.
pub(crate) fn cpu_tier(label: &str) -> u8 {
    let lower = label.to_lowercase();

    if ["celeron", "pentium", "athlon"]
        .iter()
        .any(|family| lower.contains(family))
    {
        return 1;
    }

    if lower.contains("apple m") {
        if lower.contains("max") {
            return 5;
        }
        if lower.contains("pro") {
            return 4;
        }
        return 3;
    }

    for (pattern, tier) in CORE_I_TIERS.iter() {
        if pattern.is_match(label) {
            return *tier;
        }
    }
    for (pattern, tier) in RYZEN_TIERS.iter() {
        if pattern.is_match(label) {
            return *tier;
        }
    }

    2
}

/// GPU quality tier plus whether the card is discrete.
///
/// Tier 0 with `discrete: false` covers both "no GPU mentioned" and
/// integrated graphics; the distinction lives in the listing's `gpu` field
/// being `None` or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GpuRating {
    pub tier: u8,
    pub discrete: bool,
}

const NOT_DISCRETE: GpuRating = GpuRating {
    tier: 0,
    discrete: false,
};

fn model_number(pattern: &Regex, label: &str) -> Option<u32> {
    pattern
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
}

pub(crate) fn gpu_rating(label: Option<&str>) -> GpuRating {
    let Some(label) = label else {
        return NOT_DISCRETE;
    };

    // Integrated keywords only win when no discrete RX model is present:
    // "Radeon Graphics" is an iGPU, "Radeon RX 7600" is not.
    if INTEGRATED_GPU.is_match(label) && !RX_MODEL.is_match(label) {
        return NOT_DISCRETE;
    }

    if let Some(model) = model_number(&RTX_MODEL, label) {
        let tier = match model {
            m if m >= 4080 => 5,
            m if m >= 4070 => 4,
            m if m >= 4060 => 3,
            m if m >= 3060 => 2,
            _ => 1,
        };
        return GpuRating {
            tier,
            discrete: true,
        };
    }

    if GTX_MODEL.is_match(label) {
        return GpuRating {
            tier: 1,
            discrete: true,
        };
    }

    if let Some(model) = model_number(&RX_MODEL, label) {
        let tier = match model {
            m if m >= 7900 => 5,
            m if m >= 7800 => 4,
            m if m >= 7600 => 3,
            m if m >= 6600 => 2,
            _ => 1,
        };
        return GpuRating {
            tier,
            discrete: true,
        };
    }

    if let Some(model) = model_number(&ARC_MODEL, label) {
        let tier = match model {
            m if m >= 770 => 3,
            m if m >= 750 => 2,
            _ => 1,
        };
        return GpuRating {
            tier,
            discrete: true,
        };
    }

    // A brand word with no recognizable model number is probably still a
    // real card — an older or exotic one. Score it conservatively.
    if GPU_BRAND_WORD.is_match(label) {
        return GpuRating {
            tier: 1,
            discrete: true,
        };
    }

    NOT_DISCRETE
}

/// RAM contribution, 0–3.
pub(crate) fn ram_score(ram_gb: u32) -> u8 {
    match ram_gb {
        gb if gb >= 32 => 3,
        gb if gb >= 16 => 2,
        gb if gb >= 8 => 1,
        _ => 0,
    }
}

/// How closely the price tracks the midpoint of the un-widened preference
/// band, in `[0, 1]`. A degenerate midpoint scores 0.
fn budget_fit(price: f64, band: PriceBand) -> f64 {
    let midpoint = band.midpoint();
    if midpoint <= 0.0 {
        return 0.0;
    }
    1.0 - ((price - midpoint).abs() / midpoint).clamp(0.0, 1.0)
}

/// Scores one eligible listing against the un-widened preference band and
/// produces its display reasons.
///
/// `score = round₁((0.4·cpu + 0.4·gpu + 0.2·ram) × 20 + budget_fit × 20)`.
#[must_use]
pub fn score_listing(listing: StructuredListing, band: PriceBand) -> Recommendation {
    let rating = gpu_rating(listing.gpu.as_deref());

    let performance = 0.4 * f64::from(cpu_tier(&listing.cpu))
        + 0.4 * f64::from(rating.tier)
        + 0.2 * f64::from(ram_score(listing.ram_gb));
    let fit = budget_fit(listing.price, band);
    let score = ((performance * 20.0 + fit * 20.0) * 10.0).round() / 10.0;

    let reasons = build_reasons(&listing, rating.discrete);

    Recommendation {
        listing,
        score,
        reasons,
    }
}

/// Reason lines in fixed order: CPU, GPU (discrete cards only), RAM, then a
/// storage line when the size is known.
fn build_reasons(listing: &StructuredListing, discrete_gpu: bool) -> Vec<String> {
    let mut reasons = vec![format!("CPU: {}", listing.cpu)];

    if discrete_gpu {
        if let Some(gpu) = &listing.gpu {
            reasons.push(format!("GPU: {gpu}"));
        }
    }

    reasons.push(format!("{}GB RAM", listing.ram_gb));

    if let Some(gb) = listing.storage_gb {
        let kind = listing
            .storage_kind
            .unwrap_or(StorageKind::Unknown)
            .reason_label();
        if gb >= 1024 {
            // 1536GB reads as "1.5TB"; whole terabytes drop the fraction.
            let tb = f64::from(gb) / 1024.0;
            reasons.push(format!("{tb}TB {kind}"));
        } else {
            reasons.push(format!("{gb}GB {kind}"));
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // cpu_tier
    // -----------------------------------------------------------------------

    #[test]
    fn cpu_tier_core_i_ladder() {
        assert_eq!(cpu_tier("Intel Core i9"), 5);
        assert_eq!(cpu_tier("Intel Core i7"), 4);
        assert_eq!(cpu_tier("Intel Core i5"), 3);
        assert_eq!(cpu_tier("Intel Core i3"), 2);
    }

    #[test]
    fn cpu_tier_ryzen_ladder() {
        assert_eq!(cpu_tier("AMD Ryzen 9"), 5);
        assert_eq!(cpu_tier("AMD Ryzen 7"), 4);
        assert_eq!(cpu_tier("AMD Ryzen 5"), 3);
        assert_eq!(cpu_tier("AMD Ryzen 3"), 2);
    }

    #[test]
    fn cpu_tier_apple_silicon() {
        assert_eq!(cpu_tier("Apple M2"), 3);
        assert_eq!(cpu_tier("Apple M2 Pro"), 4);
        assert_eq!(cpu_tier("Apple M2 Max"), 5);
    }

    #[test]
    fn cpu_tier_low_end_families() {
        assert_eq!(cpu_tier("Intel Celeron N5105"), 1);
        assert_eq!(cpu_tier("Intel Pentium Gold"), 1);
        assert_eq!(cpu_tier("AMD Athlon 3000G"), 1);
    }

    #[test]
    fn cpu_tier_unrecognized_defaults_to_two() {
        assert_eq!(cpu_tier("Xeon E5-2690"), 2);
    }

    #[test]
    fn cpu_tier_i9_never_read_as_i3() {
        // Whole-word matching, most significant digit first.
        assert_eq!(cpu_tier("Core i9-13900K"), 5);
    }

    // -----------------------------------------------------------------------
    // gpu_rating
    // -----------------------------------------------------------------------

    #[test]
    fn gpu_absent_is_tier_zero_not_discrete() {
        assert_eq!(gpu_rating(None), NOT_DISCRETE);
    }

    #[test]
    fn gpu_rtx_tier_boundaries_inclusive() {
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 4090")).tier, 5);
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 4080")).tier, 5);
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 4070")).tier, 4);
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 4060")).tier, 3);
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 3060")).tier, 2);
        assert_eq!(gpu_rating(Some("NVIDIA GeForce RTX 2060")).tier, 1);
    }

    #[test]
    fn gpu_rtx_is_discrete() {
        assert!(gpu_rating(Some("NVIDIA GeForce RTX 4060")).discrete);
    }

    #[test]
    fn gpu_gtx_is_tier_one_discrete() {
        let rating = gpu_rating(Some("NVIDIA GeForce GTX 1660 SUPER"));
        assert_eq!(rating.tier, 1);
        assert!(rating.discrete);
    }

    #[test]
    fn gpu_rx_tier_ladder() {
        assert_eq!(gpu_rating(Some("AMD Radeon RX 7900 XT")).tier, 5);
        assert_eq!(gpu_rating(Some("AMD Radeon RX 7800 XT")).tier, 4);
        assert_eq!(gpu_rating(Some("AMD Radeon RX 7600")).tier, 3);
        assert_eq!(gpu_rating(Some("AMD Radeon RX 6600")).tier, 2);
        assert_eq!(gpu_rating(Some("AMD Radeon RX 5500")).tier, 1);
    }

    #[test]
    fn gpu_arc_tier_ladder() {
        assert_eq!(gpu_rating(Some("Intel Arc A770")).tier, 3);
        assert_eq!(gpu_rating(Some("Intel Arc A750")).tier, 2);
        assert_eq!(gpu_rating(Some("Intel Arc A380")).tier, 1);
    }

    #[test]
    fn gpu_integrated_keywords_are_tier_zero() {
        for label in [
            "Intel UHD Graphics 730",
            "Intel Iris Xe",
            "Intel Graphics",
            "AMD Radeon Graphics",
        ] {
            let rating = gpu_rating(Some(label));
            assert_eq!(rating.tier, 0, "label: {label}");
            assert!(!rating.discrete, "label: {label}");
        }
    }

    #[test]
    fn gpu_rx_model_overrides_integrated_keyword() {
        // "Radeon" + "Graphics" reads as integrated unless a discrete RX
        // model number is present.
        let rating = gpu_rating(Some("Radeon Graphics RX 7600"));
        assert_eq!(rating.tier, 3);
        assert!(rating.discrete);
    }

    #[test]
    fn gpu_brand_word_without_model_is_tier_one_discrete() {
        let rating = gpu_rating(Some("NVIDIA GeForce"));
        assert_eq!(rating.tier, 1);
        assert!(rating.discrete);
    }

    #[test]
    fn gpu_unrecognized_label_is_tier_zero() {
        assert_eq!(gpu_rating(Some("Matrox Millennium")), NOT_DISCRETE);
    }

    // -----------------------------------------------------------------------
    // ram_score
    // -----------------------------------------------------------------------

    #[test]
    fn ram_score_ladder() {
        assert_eq!(ram_score(64), 3);
        assert_eq!(ram_score(32), 3);
        assert_eq!(ram_score(16), 2);
        assert_eq!(ram_score(8), 1);
        assert_eq!(ram_score(4), 0);
    }

    // -----------------------------------------------------------------------
    // score_listing
    // -----------------------------------------------------------------------

    fn listing(title: &str, price: f64) -> StructuredListing {
        crate::structure_listing(&rigrec_core::RawListing {
            title: title.to_string(),
            url: "https://example.com/item".to_string(),
            price: Some(price),
            image_url: None,
        })
        .expect("fixture titles carry mandatory fields")
    }

    #[test]
    fn spec_fixture_scores_and_reasons() {
        // i5 (3), RTX 4060 (3), 16GB (2): performance = 2.8.
        // Band 700-999: midpoint 849.5, fit = 1 - 249.5/849.5 ≈ 0.7063.
        // Score = 56 + 14.126 → 70.1 after rounding to one decimal.
        let rec = score_listing(
            listing(
                "CyberPowerPC Gamer Xtreme (Intel Core i5, RTX 4060, 16GB RAM, 1TB NVMe SSD)",
                1099.0,
            ),
            rigrec_core::BudgetRange::From700To999.price_band(),
        );
        assert!((rec.score - 70.1).abs() < 1e-9, "score was {}", rec.score);
        assert_eq!(
            rec.reasons,
            vec![
                "CPU: Intel Core i5",
                "GPU: NVIDIA GeForce RTX 4060",
                "16GB RAM",
                "1TB SSD",
            ]
        );
    }

    #[test]
    fn no_gpu_means_no_gpu_reason_line() {
        let rec = score_listing(
            listing("HP Pavilion Desktop (Intel Core i3, 8GB RAM, 256GB SSD)", 479.0),
            rigrec_core::BudgetRange::Under700.price_band(),
        );
        assert!(
            rec.reasons.iter().all(|r| !r.starts_with("GPU:")),
            "reasons: {:?}",
            rec.reasons
        );
        assert_eq!(rec.reasons[0], "CPU: Intel Core i3");
        assert_eq!(rec.reasons[1], "8GB RAM");
        assert_eq!(rec.reasons[2], "256GB SSD");
    }

    #[test]
    fn fractional_terabyte_reason() {
        let rec = score_listing(
            listing("Workstation Intel Core i7, 32GB RAM, 1.5TB SSD", 1400.0),
            rigrec_core::BudgetRange::From1000To1499.price_band(),
        );
        assert!(rec.reasons.contains(&"1.5TB SSD".to_string()));
    }

    #[test]
    fn unknown_storage_kind_reads_as_storage() {
        let rec = score_listing(
            listing("Intel Core i5 desktop, 16GB RAM, 512GB drive", 850.0),
            rigrec_core::BudgetRange::From700To999.price_band(),
        );
        assert!(rec.reasons.contains(&"512GB Storage".to_string()));
    }

    #[test]
    fn price_at_midpoint_maximizes_budget_fit() {
        let band = rigrec_core::BudgetRange::From700To999.price_band();
        assert!((budget_fit(849.5, band) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn budget_fit_clamps_to_zero_far_from_midpoint() {
        let band = rigrec_core::BudgetRange::Under700.price_band();
        // Midpoint 350; price 900 is > 2x midpoint away.
        assert_eq!(budget_fit(900.0, band), 0.0);
    }

    #[test]
    fn unbounded_band_uses_synthetic_midpoint() {
        let band = rigrec_core::BudgetRange::From1500Plus.price_band();
        assert!((budget_fit(1800.0, band) - 1.0).abs() < 1e-9);
    }
}
