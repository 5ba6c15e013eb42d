//! Best-match selection of a reference entry against a candidate set.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::content_type::ContentType;
use crate::catalog::entity::CatalogEntity;
use crate::matching::scorer::{self, ScoreWeights};

static RE_DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex"));

/// Tuned decision parameters for match acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchControls {
    /// Strict lower bound a score must exceed to be accepted.
    pub acceptance_threshold: f64,
    /// Added when the normalized names are exactly equal.
    pub exact_name_bonus: f64,
    /// Added when the candidate is a full game.
    pub full_game_bonus: f64,
    /// Added when both names embed the same integer sequence.
    pub numeric_sequence_bonus: f64,
    /// Subtracted when only the candidate's name mentions "dlc".
    pub dlc_penalty: f64,
    pub weights: ScoreWeights,
}

impl Default for MatchControls {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.6,
            exact_name_bonus: 0.3,
            full_game_bonus: 0.2,
            numeric_sequence_bonus: 0.15,
            dlc_penalty: 0.2,
            weights: ScoreWeights::default(),
        }
    }
}

/// Reporting band for an accepted confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchQuality {
    Strong,
    Moderate,
}

impl MatchQuality {
    /// Band an accepted confidence. Acceptance already floors at the
    /// threshold, so everything below strong is moderate.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            MatchQuality::Strong
        } else {
            MatchQuality::Moderate
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchQuality::Strong => "strong",
            MatchQuality::Moderate => "moderate",
        };
        write!(f, "{label}")
    }
}

/// Structured bonus or penalty applied on top of base similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScoreAdjustment {
    ExactNormalizedName,
    FullGameCandidate,
    NumericSequenceAgreement,
    DlcMismatchPenalty,
}

/// One scored candidate from [`rank_candidates`], carrying the score
/// breakdown for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Index into the original candidate slice.
    pub index: usize,
    /// Base similarity before matcher adjustments.
    pub similarity: f64,
    /// Final score the acceptance decision runs on. Unclamped, so
    /// stacked bonuses may exceed 1.0.
    pub score: f64,
    pub adjustments: Vec<ScoreAdjustment>,
}

/// Score every eligible candidate against the reference and return them
/// descending by score; equal scores keep candidate order. Mutates
/// nothing, so rejected near-misses can still be shown to a reviewer.
pub fn rank_candidates(
    controls: &MatchControls,
    reference: &CatalogEntity,
    candidates: &[CatalogEntity],
) -> Vec<ScoredCandidate> {
    let reference_norm = reference.canonical_name();
    let reference_raw = reference.display_name.to_lowercase();
    let reference_numbers = digit_runs(&reference_norm);

    // Full games are the preferred target; other content types only
    // compete when the candidate set offers no full game at all.
    let has_full_game = candidates
        .iter()
        .any(|c| c.content_type == ContentType::FullGame);

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            !has_full_game || candidate.content_type == ContentType::FullGame
        })
        .map(|(index, candidate)| {
            score_candidate(
                controls,
                &reference_norm,
                &reference_raw,
                &reference_numbers,
                index,
                candidate,
            )
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    scored
}

/// Find the best counterpart for `reference` with default controls.
pub fn find_best_match<'a>(
    reference: &CatalogEntity,
    candidates: &'a mut [CatalogEntity],
) -> (Option<&'a CatalogEntity>, f64) {
    find_best_match_with(&MatchControls::default(), reference, candidates)
}

/// Find the best counterpart for `reference` among `candidates`.
///
/// Only a score strictly above the acceptance threshold counts; ties on
/// the maximum keep the first-seen candidate. On acceptance the winner
/// records a copy of the reference and the confidence, clamped into
/// `[0, 1]`. Anything else leaves the slice untouched and returns
/// `(None, 0.0)`.
pub fn find_best_match_with<'a>(
    controls: &MatchControls,
    reference: &CatalogEntity,
    candidates: &'a mut [CatalogEntity],
) -> (Option<&'a CatalogEntity>, f64) {
    if candidates.is_empty() {
        return (None, 0.0);
    }

    let ranked = rank_candidates(controls, reference, candidates);
    match accept_best(controls, reference, candidates, &ranked) {
        (Some(index), confidence) => (Some(&candidates[index]), confidence),
        (None, _) => (None, 0.0),
    }
}

/// Apply the acceptance decision to a ranked candidate list, recording
/// the counterpart on the winner. Returns the winning index so callers
/// that keep the ranked list for diagnostics do not score twice.
pub(crate) fn accept_best(
    controls: &MatchControls,
    reference: &CatalogEntity,
    candidates: &mut [CatalogEntity],
    ranked: &[ScoredCandidate],
) -> (Option<usize>, f64) {
    let best = match ranked.first() {
        Some(best) => best,
        None => return (None, 0.0),
    };

    if best.score > controls.acceptance_threshold {
        let confidence = best.score.clamp(0.0, 1.0);
        let winner = &mut candidates[best.index];
        winner.matched_counterpart = Some(Box::new(reference.clone()));
        winner.match_confidence = confidence;
        (Some(best.index), confidence)
    } else {
        (None, 0.0)
    }
}

fn score_candidate(
    controls: &MatchControls,
    reference_norm: &str,
    reference_raw: &str,
    reference_numbers: &[String],
    index: usize,
    candidate: &CatalogEntity,
) -> ScoredCandidate {
    let candidate_norm = candidate.canonical_name();
    let candidate_raw = candidate.display_name.to_lowercase();

    let similarity = scorer::score_normalized_pair(
        &controls.weights,
        reference_norm,
        &candidate_norm,
        reference_raw,
        &candidate_raw,
    );
    let mut score = similarity;
    let mut adjustments = Vec::new();

    if reference_norm == candidate_norm {
        score += controls.exact_name_bonus;
        adjustments.push(ScoreAdjustment::ExactNormalizedName);
    }

    if candidate.content_type == ContentType::FullGame {
        score += controls.full_game_bonus;
        adjustments.push(ScoreAdjustment::FullGameCandidate);
    }

    let candidate_numbers = digit_runs(&candidate_norm);
    if !reference_numbers.is_empty()
        && !candidate_numbers.is_empty()
        && reference_numbers == candidate_numbers.as_slice()
    {
        score += controls.numeric_sequence_bonus;
        adjustments.push(ScoreAdjustment::NumericSequenceAgreement);
    }

    if candidate_norm.contains("dlc") && !reference_norm.contains("dlc") {
        score -= controls.dlc_penalty;
        adjustments.push(ScoreAdjustment::DlcMismatchPenalty);
    }

    ScoredCandidate {
        index,
        similarity,
        score,
        adjustments,
    }
}

/// Integer runs in order of appearance, compared positionally: "7" in
/// the reference only matches "7" in the same run position.
fn digit_runs(name: &str) -> Vec<String> {
    RE_DIGIT_RUNS
        .find_iter(name)
        .map(|m| m.as_str().to_string())
        .collect()
}
