//! The candidate-to-recommendation pipeline.
//!
//! Three stages, each pure and synchronous: title-based spec extraction
//! ([`extract`]), eligibility filtering ([`filter`]), and scoring/ranking
//! ([`score`], [`pipeline`]). The pipeline operates entirely on in-memory
//! values — the upstream search and its fallback handling live in
//! `rigrec-search` and are never imported here, so everything in this crate
//! is testable without network mocking.

mod extract;
mod filter;
mod pipeline;
mod score;
mod structure;
mod types;

pub use extract::{extract_cpu, extract_gpu, extract_ram_gb, extract_storage};
pub use filter::{is_eligible, meets_mandatory_fields, meets_storage_minimum, within_budget};
pub use pipeline::{recommend, RecommendOptions};
pub use score::score_listing;
pub use structure::structure_listing;
pub use types::{Recommendation, StorageKind, StructuredListing};
