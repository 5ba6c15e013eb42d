//! Weighted name-similarity scoring between catalog entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::normalizer;

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 1.0;

/// Multi-word franchise fragments granting a bonus when both names carry
/// the same one. Extensible, not exhaustive.
const FRANCHISE_FRAGMENTS: &[&str] = &[
    "assassins creed",
    "final fantasy",
    "call of duty",
    "grand theft auto",
    "mortal kombat",
];

/// Tuned weights for the similarity arithmetic. The defaults are the
/// values the acceptance threshold was calibrated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Raw-name ratio above this grants the raw boost.
    pub raw_ratio_threshold: f64,
    /// Added when the raw-name ratio clears its threshold.
    pub raw_boost: f64,
    /// Normalized-length difference above this starts the penalty.
    pub length_penalty_threshold: usize,
    /// Penalty per character of length difference.
    pub length_penalty_step: f64,
    /// Ceiling on the total length penalty.
    pub length_penalty_cap: f64,
    /// Added per shared word once more than one word is shared.
    pub shared_word_bonus: f64,
    /// Added per franchise fragment present in both names.
    pub franchise_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            raw_ratio_threshold: 0.8,
            raw_boost: 0.2,
            length_penalty_threshold: 5,
            length_penalty_step: 0.02,
            length_penalty_cap: 0.2,
            shared_word_bonus: 0.1,
            franchise_bonus: 0.15,
        }
    }
}

/// Similarity between two display names in `[0, 1]` under default
/// weights.
pub fn similarity(name_a: &str, name_b: &str) -> f64 {
    similarity_with(&ScoreWeights::default(), name_a, name_b)
}

/// Similarity between two display names under caller-supplied weights.
/// Derives both comparison forms itself: the normalized names for the
/// base ratio and the lowercased originals for the raw boost.
pub fn similarity_with(weights: &ScoreWeights, name_a: &str, name_b: &str) -> f64 {
    score_normalized_pair(
        weights,
        &normalizer::normalize_name(name_a),
        &normalizer::normalize_name(name_b),
        &name_a.to_lowercase(),
        &name_b.to_lowercase(),
    )
}

/// Core arithmetic over pre-derived name forms. The matcher calls this
/// directly so the reference name is normalized once per search, not
/// once per candidate.
pub(crate) fn score_normalized_pair(
    weights: &ScoreWeights,
    norm_a: &str,
    norm_b: &str,
    raw_a: &str,
    raw_b: &str,
) -> f64 {
    let mut score = strsim::normalized_levenshtein(norm_a, norm_b);

    // Normalization can strip meaningful content; near-identical raw
    // names pull the score back up.
    if strsim::normalized_levenshtein(raw_a, raw_b) > weights.raw_ratio_threshold {
        score = (score + weights.raw_boost).min(SCORE_MAX);
    }

    let length_diff = norm_a.chars().count().abs_diff(norm_b.chars().count());
    if length_diff > weights.length_penalty_threshold {
        score -= (length_diff as f64 * weights.length_penalty_step).min(weights.length_penalty_cap);
    }

    let words_a: HashSet<&str> = norm_a.split_whitespace().collect();
    let words_b: HashSet<&str> = norm_b.split_whitespace().collect();
    let shared = words_a.intersection(&words_b).count();
    if shared > 1 {
        score += shared as f64 * weights.shared_word_bonus;
    }

    for fragment in FRANCHISE_FRAGMENTS {
        if norm_a.contains(fragment) && norm_b.contains(fragment) {
            score += weights.franchise_bonus;
        }
    }

    score.clamp(SCORE_MIN, SCORE_MAX)
}
