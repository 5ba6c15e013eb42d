//! Content-type classification for catalog listings.
//!
//! Five stages, each refining the previous: store code, localized label,
//! virtual-currency override, display-name patterns, game-term fallback.
//! Classification is total: absent or empty inputs skip their stage and
//! the catch-all is [`ContentType::Unknown`].

use std::sync::LazyLock;

use crate::catalog::content_type::ContentType;
use crate::matching::tables::{self, ClassifierTables};

static DEFAULT_TABLES: LazyLock<ClassifierTables> = LazyLock::new(ClassifierTables::default);

/// Classify a listing with the built-in rule tables.
pub fn classify(
    raw_classification: &str,
    localized_classification: &str,
    display_name: &str,
) -> ContentType {
    classify_with(
        &DEFAULT_TABLES,
        raw_classification,
        localized_classification,
        display_name,
    )
}

/// Classify a listing with a caller-supplied rule set.
pub fn classify_with(
    tables: &ClassifierTables,
    raw_classification: &str,
    localized_classification: &str,
    display_name: &str,
) -> ContentType {
    let mut content_type =
        ContentType::from_store_code(raw_classification).unwrap_or(ContentType::Unknown);

    // The localized label wins over the store code: codes in the wild
    // are often generic or unset while the label tracks the listing.
    if !localized_classification.is_empty() {
        let label_lower = localized_classification.to_lowercase();
        if let Some(rule) = tables
            .localized_rules
            .iter()
            .find(|rule| rule.matches(&label_lower))
        {
            content_type = rule.content_type;
        }
    }

    let name_lower = display_name.to_lowercase();

    // Currency packs hide behind premium-sounding names ("Starter Pack
    // 1000 Coins" sold under an EDITION code), so this stage overrides
    // everything except an already-established add-on type.
    if !matches!(
        content_type,
        ContentType::AddOn | ContentType::PremiumAddOn
    ) && is_currency_listing(tables, &name_lower)
    {
        content_type = ContentType::VirtualCurrency;
    }

    if content_type != ContentType::VirtualCurrency {
        content_type = apply_name_patterns(content_type, &name_lower);
    }

    if content_type == ContentType::Unknown
        && tables::GAME_TERMS
            .iter()
            .any(|term| name_lower.contains(term))
    {
        content_type = ContentType::FullGame;
    }

    content_type
}

fn is_currency_listing(tables: &ClassifierTables, name_lower: &str) -> bool {
    tables
        .currency_terms
        .iter()
        .any(|term| name_lower.contains(term.as_str()))
        || tables::matches_pack_pattern(name_lower)
}

/// Display-name signals, first applicable rule wins. An add-on that
/// advertises its edition stays an add-on.
fn apply_name_patterns(current: ContentType, name_lower: &str) -> ContentType {
    for (content_type, needles) in tables::NAME_PATTERN_RULES {
        if needles.iter().any(|needle| name_lower.contains(needle)) {
            if *content_type == ContentType::Edition && current == ContentType::AddOn {
                return current;
            }
            return *content_type;
        }
    }
    current
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
