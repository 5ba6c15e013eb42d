//! Cross-catalog sweep: many independent match jobs run in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::entity::CatalogEntity;
use crate::matching::matcher::{self, MatchControls, MatchQuality, ScoredCandidate};

/// Near-miss candidates kept per unmatched record for review.
const NEAR_MISS_LIMIT: usize = 3;

/// One reference entry plus the candidate set retrieved for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchJob {
    pub reference: CatalogEntity,
    pub candidates: Vec<CatalogEntity>,
}

/// Outcome of a single job. `candidates` carries the post-match
/// entities, so an accepted winner holds the counterpart and the
/// confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub reference: CatalogEntity,
    pub candidates: Vec<CatalogEntity>,
    /// Index of the accepted candidate, if any.
    pub best_index: Option<usize>,
    pub confidence: f64,
    pub quality: Option<MatchQuality>,
    /// Top rejected candidates, kept only when nothing was accepted.
    pub near_misses: Vec<ScoredCandidate>,
}

/// Sweep-level outcome counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Full report for one sweep. Records appear in job order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub records: Vec<MatchRecord>,
    pub summary: MatchSummary,
}

/// Run every job and collect per-job records plus summary counts.
///
/// Jobs are independent (each owns its entities), so they run in
/// parallel; the record order still mirrors the job order.
pub fn match_catalogs(jobs: Vec<MatchJob>, controls: &MatchControls) -> MatchReport {
    let records: Vec<MatchRecord> = jobs
        .into_par_iter()
        .map(|job| run_job(job, controls))
        .collect();

    let matched = records.iter().filter(|r| r.best_index.is_some()).count();
    let summary = MatchSummary {
        total: records.len(),
        matched,
        unmatched: records.len() - matched,
    };
    log::info!(
        "Catalog sweep complete: {}/{} references matched",
        summary.matched,
        summary.total
    );

    MatchReport { records, summary }
}

fn run_job(job: MatchJob, controls: &MatchControls) -> MatchRecord {
    let MatchJob {
        reference,
        mut candidates,
    } = job;

    let ranked = matcher::rank_candidates(controls, &reference, &candidates);
    let (best_index, confidence) =
        matcher::accept_best(controls, &reference, &mut candidates, &ranked);

    match best_index {
        Some(index) => log::debug!(
            "Matched \"{}\" -> \"{}\" (confidence {:.2})",
            reference.display_name,
            candidates[index].display_name,
            confidence
        ),
        None => log::debug!("No match for \"{}\"", reference.display_name),
    }

    let quality = best_index.map(|_| MatchQuality::from_confidence(confidence));
    let near_misses = if best_index.is_none() {
        ranked.into_iter().take(NEAR_MISS_LIMIT).collect()
    } else {
        Vec::new()
    };

    MatchRecord {
        reference,
        candidates,
        best_index,
        confidence,
        quality,
        near_misses,
    }
}
