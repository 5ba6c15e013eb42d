//! Data tables driving classification.
//!
//! Language coverage grows by adding table entries (or loading JSON), not
//! by adding branches: the classifier walks these rules in order and the
//! first hit wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::content_type::ContentType;
use crate::types::errors::{CatalogError, CatalogResult};

/// One localized-classification rule. A rule fires when any of its phrase
/// groups has every phrase contained in the lowercased label, so a group
/// is an AND over its phrases and the group list an OR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedRule {
    pub content_type: ContentType,
    #[serde(default)]
    pub phrase_groups: Vec<Vec<String>>,
}

impl LocalizedRule {
    fn new(content_type: ContentType, groups: &[&[&str]]) -> Self {
        Self {
            content_type,
            phrase_groups: groups
                .iter()
                .map(|group| group.iter().map(|p| p.to_string()).collect())
                .collect(),
        }
    }

    /// Whether the lowercased localized label satisfies this rule.
    pub fn matches(&self, label_lower: &str) -> bool {
        self.phrase_groups.iter().any(|group| {
            !group.is_empty()
                && group
                    .iter()
                    .all(|phrase| label_lower.contains(phrase.as_str()))
        })
    }
}

/// Currency nouns and pack phrases that mark a listing as wallet top-up
/// content. Checked as lowercase substrings of the display name.
const CURRENCY_TERMS: &[&str] = &[
    "coins",
    "credits",
    "tokens",
    "gems",
    "gold",
    "silver",
    "cash",
    "bucks",
    "points",
    "stars",
    "diamonds",
    "crystals",
    "rubies",
    "currency",
    "wallet",
    "funds",
    "v-bucks",
    "apex coins",
    "shark card",
    "shark cash",
    "moon credits",
    "rainbow coins",
    "cells",
    "astral diamonds",
    "platinum",
    "gil",
    "zenny",
    "munny",
    "florins",
    "kreds",
    "rep",
    "orbs",
    "essence",
    "shards",
    "dust",
    "crowns",
    "seeds",
    "leaves",
    "berries",
    "starter pack",
    "starter bundle",
    "founders pack",
    "season pass",
    "character pack",
    "skin pack",
    "costume pack",
    "cosmetic",
    "booster pack",
    "item pack",
    "loot pack",
    "resource pack",
    "virtual currency",
    "in-game currency",
    "digital currency",
];

/// Display-name refinements applied after the currency stage, first
/// match wins. The Edition entry is special-cased by the classifier: an
/// add-on that mentions "edition" stays an add-on.
pub(crate) const NAME_PATTERN_RULES: &[(ContentType, &[&str])] = &[
    (ContentType::AddOn, &["dlc", "add-on", "expansion"]),
    (ContentType::Theme, &["theme", "teema"]),
    (ContentType::Avatar, &["avatar"]),
    (ContentType::Bundle, &["bundle", "paketti", "kokoelma"]),
    (ContentType::Edition, &["edition"]),
];

/// Tokens suggesting an unresolved listing is a game at all; the
/// classifier's last resort before `Unknown`.
pub(crate) const GAME_TERMS: &[&str] =
    &["game", "peli", "assassin", "creed", "odyssey", "valhalla"];

static RE_CURRENCY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+[kK]?\s*(coins?|credits?|tokens?|gems?|gold|bucks?|points?|diamonds?)\b")
        .expect("Invalid regex")
});

static RE_SIZED_PACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(small|medium|large|huge|massive|mega|ultra|supreme|epic|legendary|starter)\s+(pack|bundle|bag|chest|box|pouch)\b",
    )
    .expect("Invalid regex")
});

static RE_PACK_OF_N: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpack\s+of\s+\d+\b").expect("Invalid regex"));

static RE_GROUPED_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+[,\s]\d{3}\s+(coins?|credits?|tokens?)\b").expect("Invalid regex")
});

/// Whether the lowercased display name matches one of the compiled
/// currency-pack shapes ("1000 coins", "mega bundle", "pack of 12").
pub(crate) fn matches_pack_pattern(name_lower: &str) -> bool {
    RE_CURRENCY_AMOUNT.is_match(name_lower)
        || RE_SIZED_PACK.is_match(name_lower)
        || RE_PACK_OF_N.is_match(name_lower)
        || RE_GROUPED_AMOUNT.is_match(name_lower)
}

/// The rule set consumed by the classifier. `Default` carries the
/// built-in tables; custom sets can be assembled in code or loaded from
/// JSON via [`ClassifierTables::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierTables {
    /// Ordered localized-label rules; the first firing rule wins.
    #[serde(default)]
    pub localized_rules: Vec<LocalizedRule>,
    /// Substring lexicon for the virtual-currency override.
    #[serde(default = "default_currency_terms")]
    pub currency_terms: Vec<String>,
}

impl ClassifierTables {
    /// Load a rule set from JSON, e.g. to extend language coverage
    /// without a rebuild.
    pub fn from_json(json_str: &str) -> CatalogResult<Self> {
        let tables: Self = serde_json::from_str(json_str).map_err(|e| {
            CatalogError::RuleTable(format!("Failed to parse rule table JSON: {e}"))
        })?;
        if tables.localized_rules.is_empty() {
            log::warn!(
                "Rule table has no localized rules; classification will rely on store codes and name patterns only"
            );
        }
        Ok(tables)
    }
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self {
            localized_rules: builtin_localized_rules(),
            currency_terms: default_currency_terms(),
        }
    }
}

fn default_currency_terms() -> Vec<String> {
    CURRENCY_TERMS.iter().map(|t| t.to_string()).collect()
}

/// Finnish labels first, then the English continuations not already
/// covered by a Finnish rule. Order is reliability: the specific
/// conjunction ("kokonainen" + "peli") must fire before anything that
/// could shadow it.
fn builtin_localized_rules() -> Vec<LocalizedRule> {
    vec![
        LocalizedRule::new(ContentType::FullGame, &[&["kokonainen", "peli"]]),
        LocalizedRule::new(ContentType::AddOn, &[&["lisäosa"], &["liite"]]),
        LocalizedRule::new(ContentType::Demo, &[&["demo"]]),
        LocalizedRule::new(ContentType::Trial, &[&["kokeilu"], &["koe"]]),
        LocalizedRule::new(ContentType::Bundle, &[&["paketti"], &["kokoelma"]]),
        LocalizedRule::new(ContentType::Theme, &[&["teema"]]),
        LocalizedRule::new(ContentType::Avatar, &[&["avatar"]]),
        LocalizedRule::new(ContentType::Subscription, &[&["tilaus"]]),
        LocalizedRule::new(ContentType::Edition, &[&["versio"], &["painos"]]),
        LocalizedRule::new(ContentType::FullGame, &[&["full game"]]),
        LocalizedRule::new(ContentType::AddOn, &[&["add-on"], &["dlc"]]),
        LocalizedRule::new(ContentType::Bundle, &[&["bundle"]]),
        LocalizedRule::new(ContentType::Theme, &[&["theme"]]),
        LocalizedRule::new(ContentType::Subscription, &[&["subscription"]]),
        LocalizedRule::new(ContentType::Trial, &[&["trial"]]),
        LocalizedRule::new(ContentType::Edition, &[&["edition"]]),
    ]
}
