//! Catalog entity model: raw listing intake and the typed entity value.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::content_type::ContentType;
use crate::catalog::release_date;
use crate::matching::classifier;
use crate::matching::normalizer;

/// Placeholder for absent price fields, kept in the interchange format
/// instead of null so price columns always render.
const PRICE_UNAVAILABLE: &str = "N/A";

static RE_DISCOUNT_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)%").expect("Invalid regex"));

/// Per-listing fields handed over by the scraping layer, straight out of
/// a page's embedded product JSON. Only the identity fields are
/// mandatory; everything else degrades to absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub base_price: Option<String>,
    #[serde(default)]
    pub discounted_price: Option<String>,
    #[serde(default)]
    pub discount_text: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub raw_classification: Option<String>,
    #[serde(default)]
    pub localized_classification: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A classified catalog entry from either store.
///
/// Serializes with camelCase keys; this is the interchange format the
/// export and presentation layers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    pub identifier: String,
    pub display_name: String,
    pub canonical_url: String,
    /// Effective price: the discounted price when one exists, otherwise
    /// the base price, otherwise `"N/A"`.
    pub price: String,
    /// Pre-discount price, present only when a discount made it differ
    /// from `price`.
    pub original_price: Option<String>,
    /// Bare number lifted from the discount text ("-25%" gives "25").
    pub discount_percent: Option<String>,
    #[serde(default)]
    pub platform_tags: Vec<String>,
    /// `DD.MM.YYYY`, or absent when the source value never parsed.
    pub release_date: Option<String>,
    pub raw_classification: Option<String>,
    pub localized_classification: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    /// Counterpart from the other catalog once a match is accepted.
    pub matched_counterpart: Option<Box<CatalogEntity>>,
    #[serde(default)]
    pub match_confidence: f64,
}

impl CatalogEntity {
    /// Build an entity from a raw listing. Classification runs here so
    /// an entity never exists in an unclassified state.
    pub fn from_listing(listing: RawListing) -> Self {
        let content_type = classifier::classify(
            listing.raw_classification.as_deref().unwrap_or(""),
            listing.localized_classification.as_deref().unwrap_or(""),
            &listing.name,
        );

        let (price, original_price) =
            resolve_prices(listing.base_price.as_deref(), listing.discounted_price.as_deref());
        let discount_percent = listing
            .discount_text
            .as_deref()
            .and_then(extract_discount_percent);
        let release_date = listing
            .release_date
            .as_deref()
            .and_then(release_date::normalize_release_date);

        Self {
            identifier: listing.id,
            display_name: listing.name,
            canonical_url: listing.url,
            price,
            original_price,
            discount_percent,
            platform_tags: listing.platforms,
            release_date,
            raw_classification: none_if_blank(listing.raw_classification),
            localized_classification: none_if_blank(listing.localized_classification),
            content_type,
            matched_counterpart: None,
            match_confidence: 0.0,
        }
    }

    /// Normalized comparison form of the display name. Derived on
    /// demand, never stored, so the two can't drift apart.
    pub fn canonical_name(&self) -> String {
        normalizer::normalize_name(&self.display_name)
    }

    /// Fill the release date from a later detail fetch. Idempotent: an
    /// already-present date is never overwritten.
    pub fn attach_release_date(&mut self, raw: &str) {
        if self.release_date.is_none() {
            self.release_date = release_date::normalize_release_date(raw);
        }
    }
}

/// Pick the effective price (discounted over base) and keep the base as
/// the original only when a discount made them differ.
fn resolve_prices(base: Option<&str>, discounted: Option<&str>) -> (String, Option<String>) {
    let base = base.filter(|p| !p.is_empty() && *p != PRICE_UNAVAILABLE);
    let discounted = discounted.filter(|p| !p.is_empty() && *p != PRICE_UNAVAILABLE);

    let price = discounted.or(base).unwrap_or(PRICE_UNAVAILABLE);
    let original_price = base.filter(|b| *b != price).map(str::to_string);

    (price.to_string(), original_price)
}

fn extract_discount_percent(text: &str) -> Option<String> {
    RE_DISCOUNT_PERCENT
        .captures(text)
        .map(|caps| caps[1].to_string())
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
