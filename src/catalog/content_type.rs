//! The closed content-type set shared by both catalogs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a catalog listing.
///
/// Variants are declared in ascending display priority; the derived `Ord`
/// follows declaration order, so histogram maps iterate in the same order
/// results are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    FullGame,
    Edition,
    Bundle,
    Demo,
    Trial,
    AddOn,
    PremiumAddOn,
    Subscription,
    Theme,
    Avatar,
    VirtualCurrency,
    Unknown,
}

impl ContentType {
    /// Map a storefront category code (e.g. `FULL_GAME`) to a content
    /// type. Codes are matched case-insensitively. `UNKNOWN` and codes
    /// outside the table return `None` so the later classifier stages
    /// can resolve the entry instead.
    pub fn from_store_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "FULL_GAME" => Some(ContentType::FullGame),
            "ADD_ON" => Some(ContentType::AddOn),
            "PREMIUM_ADD_ON" => Some(ContentType::PremiumAddOn),
            "DEMO" => Some(ContentType::Demo),
            "TRIAL" => Some(ContentType::Trial),
            "BUNDLE" => Some(ContentType::Bundle),
            "THEME" => Some(ContentType::Theme),
            "AVATAR" => Some(ContentType::Avatar),
            "SUBSCRIPTION" => Some(ContentType::Subscription),
            "EDITION" => Some(ContentType::Edition),
            _ => None,
        }
    }

    /// Sort rank for result lists: full products first, cosmetics and
    /// currency packs last.
    pub fn priority_rank(&self) -> u8 {
        match self {
            ContentType::FullGame => 0,
            ContentType::Edition => 1,
            ContentType::Bundle => 2,
            ContentType::Demo => 3,
            ContentType::Trial => 4,
            ContentType::AddOn => 5,
            ContentType::PremiumAddOn => 6,
            ContentType::Subscription => 7,
            ContentType::Theme => 8,
            ContentType::Avatar => 9,
            ContentType::VirtualCurrency => 10,
            ContentType::Unknown => 11,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Unknown
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentType::FullGame => "Full Game",
            ContentType::Edition => "Edition",
            ContentType::Bundle => "Bundle",
            ContentType::Demo => "Demo",
            ContentType::Trial => "Trial",
            ContentType::AddOn => "Add-on",
            ContentType::PremiumAddOn => "Premium Add-on",
            ContentType::Subscription => "Subscription",
            ContentType::Theme => "Theme",
            ContentType::Avatar => "Avatar",
            ContentType::VirtualCurrency => "Virtual Currency",
            ContentType::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}
