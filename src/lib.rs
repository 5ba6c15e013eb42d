//! Cross-store game catalog classification and matching engine.
//!
//! Turns raw storefront listings into typed [`CatalogEntity`] values and
//! pairs entries across two catalogs: classify, normalize, prioritize,
//! score, match. The crate is a pure library; scraping, persistence and
//! presentation live in the callers.

pub mod catalog;
pub mod matching;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use catalog::content_type::ContentType;
pub use catalog::entity::{CatalogEntity, RawListing};
pub use catalog::platform::PlatformFilter;
pub use catalog::priority::{content_type_counts, sort_by_type_priority};
pub use catalog::release_date::normalize_release_date;
pub use matching::batch::{match_catalogs, MatchJob, MatchRecord, MatchReport, MatchSummary};
pub use matching::classifier::{classify, classify_with};
pub use matching::matcher::{
    find_best_match, find_best_match_with, rank_candidates, MatchControls, MatchQuality,
    ScoreAdjustment, ScoredCandidate,
};
pub use matching::normalizer::normalize_name;
pub use matching::scorer::{similarity, similarity_with, ScoreWeights};
pub use matching::tables::{ClassifierTables, LocalizedRule};
pub use types::errors::{CatalogError, CatalogResult};
