//! Title normalization for cross-catalog comparison.
//!
//! Both catalogs decorate the same product differently ("The Witcher® 3:
//! Wild Hunt – Complete Edition" vs "The Witcher 3: Wild Hunt Complete
//! Edition"). Comparisons run on the canonical form produced here, never
//! on display names.

/// Edition-style suffixes stripped from the end of a normalized title.
/// Compound phrases come before their generic tails so the single strip
/// removes the whole phrase ("complete edition" must win over "edition").
const EDITION_SUFFIXES: &[&str] = &[
    "game of the year edition",
    "goty edition",
    "definitive edition",
    "enhanced edition",
    "complete edition",
    "ultimate edition",
    "deluxe edition",
    "game of the year",
    "remastered",
    "edition",
    "goty",
];

/// Canonicalize a display title into a comparable string:
/// lowercase, drop every character that is neither alphanumeric nor
/// whitespace, collapse whitespace runs, then strip at most one trailing
/// edition-style suffix.
///
/// The output contains no strippable suffix and no decoration, so the
/// function is idempotent.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_edition_suffix(&collapsed)
}

/// Remove the first matching end-anchored suffix, if any. The suffix must
/// be preceded by a space: a title that *is* one of the phrases stays
/// intact.
fn strip_edition_suffix(name: &str) -> String {
    for suffix in EDITION_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            if let Some(stem) = stem.strip_suffix(' ') {
                return stem.to_string();
            }
        }
    }
    name.to_string()
}
