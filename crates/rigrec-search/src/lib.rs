//! Client for the upstream product-search API plus the fallback adapter.
//!
//! This is the impure shell around the pipeline: the only crate that talks
//! to the network, and the place where upstream failures are absorbed by
//! substituting the static fallback catalog.

mod client;
mod error;
mod fallback;
mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use fallback::{fetch_candidates, CandidateSet};
pub use types::{ProductRecord, SearchData, SearchEnvelope};
