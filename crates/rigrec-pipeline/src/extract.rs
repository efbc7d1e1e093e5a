//! Hardware spec extraction from free-text product titles.
//!
//! Each field is driven by an ordered table of pattern rules evaluated in
//! sequence — first match wins, later rules never fire once an earlier one
//! has. Extraction is total: every function returns "not found" rather than
//! failing, and absence is normal output, not an error.
//!
//! The field patterns are deliberately disjoint in digit-count/keyword
//! space: RAM wants 1–3 digits plus a "RAM" or "DDR" anchor, storage wants
//! 3–4 digits or a TB unit. A single ambiguous number in a title therefore
//! rarely bleeds across fields. This is a heuristic, not a guarantee.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::StorageKind;

/// One entry in an ordered extraction table: a pattern and the function
/// that turns its captures into the output label.
struct PatternRule {
    pattern: Regex,
    render: fn(&Captures<'_>) -> String,
}

fn verbatim(caps: &Captures<'_>) -> String {
    caps[0].to_string()
}

/// Joins a numeric model capture with an optional suffix capture under a
/// canonical family prefix, e.g. `("NVIDIA GeForce RTX", "4070", Some("Ti"))`
/// → `"NVIDIA GeForce RTX 4070 Ti"`.
fn canonical_model(prefix: &str, caps: &Captures<'_>) -> String {
    match caps.get(2) {
        Some(suffix) => format!("{prefix} {} {}", &caps[1], suffix.as_str()),
        None => format!("{prefix} {}", &caps[1]),
    }
}

static CPU_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule {
            pattern: Regex::new(r"(?i)\bIntel\s+Core\s+i[3579]\b").expect("valid intel core regex"),
            render: verbatim,
        },
        PatternRule {
            pattern: Regex::new(r"(?i)\bAMD\s+Ryzen\s+[3579]\b").expect("valid ryzen regex"),
            render: verbatim,
        },
        PatternRule {
            pattern: Regex::new(r"(?i)\bApple\s+M\d(?:\s+(?:Pro|Max))?\b")
                .expect("valid apple silicon regex"),
            render: verbatim,
        },
    ]
});

static GPU_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule {
            pattern: Regex::new(r"(?i)\b(?:GeForce\s+)?RTX\s?(\d{4})(?:\s?(Ti|SUPER))?\b")
                .expect("valid rtx regex"),
            render: |caps| canonical_model("NVIDIA GeForce RTX", caps),
        },
        PatternRule {
            pattern: Regex::new(r"(?i)\b(?:GeForce\s+)?GTX\s?(\d{4})(?:\s?(SUPER))?\b")
                .expect("valid gtx regex"),
            render: |caps| canonical_model("NVIDIA GeForce GTX", caps),
        },
        PatternRule {
            pattern: Regex::new(r"(?i)\b(?:Radeon\s+)?RX\s?(\d{4})(?:\s?(XT))?\b")
                .expect("valid radeon regex"),
            render: |caps| canonical_model("AMD Radeon RX", caps),
        },
        PatternRule {
            pattern: Regex::new(r"(?i)\bIntel\s+Arc\s+A\d{3}\b").expect("valid arc regex"),
            render: verbatim,
        },
    ]
});

// The first rule anchors on a literal "RAM" suffix; the second accepts a
// DDR generation without it ("32GB DDR5"). Order matters: a title carrying
// both forms should report the RAM-anchored value.
static RAM_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(\d{1,3})\s?GB\s?(?:DDR[45]\s?)?RAM\b").expect("valid ram regex"),
        Regex::new(r"(?i)\b(\d{1,3})\s?GB\s?DDR[45]\b").expect("valid ddr regex"),
    ]
});

static STORAGE_TB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s?TB\b").expect("valid tb regex"));

// 3–4 digits on purpose: 1–2 digit GB figures belong to RAM.
static STORAGE_GB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{3,4})\s?GB\b").expect("valid storage gb regex"));

static HDD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhdd\b").expect("valid hdd regex"));

fn apply_rules(rules: &[PatternRule], title: &str) -> Option<String> {
    rules
        .iter()
        .find_map(|rule| rule.pattern.captures(title).map(|caps| (rule.render)(&caps)))
}

/// Extracts a CPU label from a title.
///
/// Tries Intel Core, then AMD Ryzen, then Apple silicon; the matched
/// substring is returned verbatim, preserving the title's case and spacing.
#[must_use]
pub fn extract_cpu(title: &str) -> Option<String> {
    apply_rules(&CPU_RULES, title)
}

/// Extracts a GPU label from a title.
///
/// Tries NVIDIA RTX, NVIDIA GTX, AMD Radeon RX, then Intel Arc. NVIDIA and
/// AMD matches are normalized to canonical brand-prefixed labels (a bare
/// "RTX 4060" in the title comes back as "NVIDIA GeForce RTX 4060"); Intel
/// Arc returns the raw capture.
#[must_use]
pub fn extract_gpu(title: &str) -> Option<String> {
    apply_rules(&GPU_RULES, title)
}

/// Extracts the RAM size in gigabytes from a title.
///
/// Requires a "RAM" suffix or a DDR-generation anchor; a bare number never
/// counts. Returns `None` when absent — never zero.
#[must_use]
pub fn extract_ram_gb(title: &str) -> Option<u32> {
    RAM_RULES
        .iter()
        .find_map(|rule| rule.captures(title))
        .and_then(|caps| caps[1].parse().ok())
}

/// Extracts storage size (GB) and kind from a title.
///
/// Size: a TB figure (converted at 1024 GB/TB, rounded) wins over a 3–4
/// digit GB figure. Kind: "nvme"/"ssd" anywhere → SSD, whole-word "hdd" →
/// HDD, otherwise [`StorageKind::Unknown`]. Without a size match both are
/// absent — an SSD keyword alone says nothing about capacity.
#[must_use]
pub fn extract_storage(title: &str) -> Option<(u32, StorageKind)> {
    let size_gb = if let Some(caps) = STORAGE_TB.captures(title) {
        let tb: f64 = caps[1].parse().ok()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let gb = (tb * 1024.0).round() as u32;
        Some(gb)
    } else {
        STORAGE_GB
            .captures(title)
            .and_then(|caps| caps[1].parse().ok())
    }?;

    let lower = title.to_lowercase();
    let kind = if lower.contains("nvme") || lower.contains("ssd") {
        StorageKind::Ssd
    } else if HDD_WORD.is_match(title) {
        StorageKind::Hdd
    } else {
        StorageKind::Unknown
    };

    Some((size_gb, kind))
}
