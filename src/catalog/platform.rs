//! Console-generation filtering over free-text platform tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::entity::CatalogEntity;
use crate::types::errors::CatalogError;

/// Platform filter applied to result sets. Tags are free text scraped
/// off listing badges, so matching is by case-insensitive substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformFilter {
    /// No filtering; every entity passes.
    All,
    Ps4,
    Ps5,
}

impl PlatformFilter {
    /// Whether the entity's platform tags satisfy this filter. An
    /// entity with no tags fails any specific filter.
    pub fn matches(&self, entity: &CatalogEntity) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Ps4 => any_tag_contains(entity, &["ps4", "playstation 4"]),
            PlatformFilter::Ps5 => any_tag_contains(entity, &["ps5", "playstation 5"]),
        }
    }
}

fn any_tag_contains(entity: &CatalogEntity, needles: &[&str]) -> bool {
    entity.platform_tags.iter().any(|tag| {
        let tag_lower = tag.to_lowercase();
        needles.iter().any(|needle| tag_lower.contains(needle))
    })
}

impl FromStr for PlatformFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "both" => Ok(PlatformFilter::All),
            "ps4" => Ok(PlatformFilter::Ps4),
            "ps5" => Ok(PlatformFilter::Ps5),
            other => Err(CatalogError::PlatformFilter(other.to_string())),
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlatformFilter::All => "all",
            PlatformFilter::Ps4 => "ps4",
            PlatformFilter::Ps5 => "ps5",
        };
        write!(f, "{label}")
    }
}
