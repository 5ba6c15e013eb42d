use thiserror::Error;

/// Errors from the crate's fallible seams: rule-table loading and filter
/// parsing. The matching core itself is total and never returns these.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Rule table error: {0}")]
    RuleTable(String),

    #[error("Unknown platform filter: {0}")]
    PlatformFilter(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
