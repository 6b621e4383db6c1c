// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how candidate answers get ordered.
//!
//! Each candidate is scored independently first - confidence from the feature
//! scorer, relevance and hallucination from the ranking-side heuristics -
//! then blended, sorted, and pushed through the differentiation pass so
//! adjacent ranks never sit within [`MIN_SCORE_GAP`] points of each other.
//! Near-ties are real with rule-based scoring (two paraphrases of the same
//! answer land within a point), and a UI showing "87, 87, 86" reads as
//! noise rather than a ranking.
//!
//! Sort order:
//! 1. **Final score** - descending.
//! 2. **Input order** - stable sort, so the first-seen candidate wins a tie.
//!
//! The differentiation pass is a pure transformation: it walks the sorted
//! sequence left to right and returns a new sequence, never mutating scores
//! in place. Each forced drop lowers the bar for the next element, so
//! corrections cascade; a cluster of near-tied low scores can be driven all
//! the way to the 0 floor, at which point the gap guarantee yields to the
//! clamp.

use crate::scoring::confidence::score_confidence;
use crate::scoring::relevance::{hallucination_penalty, relevance};
use crate::types::{RankedAnswer, RankingResult};

// =============================================================================
// BLEND CONSTANTS
// =============================================================================

/// Weight of the relevance score in the final blend.
pub const RELEVANCE_WEIGHT: f64 = 0.3;

/// Weight of the aggregated confidence in the final blend.
pub const CONFIDENCE_WEIGHT: f64 = 0.6;

/// Minimum final-score gap between adjacent ranks after differentiation.
pub const MIN_SCORE_GAP: u8 = 5;

/// Score and rank a set of candidate answers for a question.
///
/// Accepts any candidate slice (the surrounding system conventionally
/// supplies exactly three, padding with duplicates when generation
/// under-produces). Output length always equals input length; an empty
/// slice is a defined no-op returning an empty `Vec`. Never fails -
/// malformed input degrades to low, well-defined scores.
///
/// Guarantees on the returned sequence:
/// - exactly one [`RankingResult`] per input candidate;
/// - ranks are exactly `{1..N}`, rank 1 first;
/// - adjacent final scores differ by at least [`MIN_SCORE_GAP`] unless the
///   lower one was floored at 0;
/// - ties before differentiation resolve in favor of the earlier candidate;
/// - each result's displayed `confidence` reflects any differentiation
///   adjustment, so it agrees with the published ordering.
pub fn rank_answers(question: &str, candidates: &[String]) -> Vec<RankingResult> {
    let mut results: Vec<RankingResult> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| score_candidate(question, candidate, index))
        .collect();

    // Stable sort: input order breaks ties.
    results.sort_by(|a, b| b.final_score.cmp(&a.final_score));

    assign_ranks(apply_min_gap(results))
}

/// Compute every per-candidate signal, independently of the other candidates.
fn score_candidate(question: &str, candidate: &str, index: usize) -> RankingResult {
    let factors = score_confidence(question, candidate);
    let relevance = relevance(question, candidate);
    let hallucination_penalty = hallucination_penalty(candidate);
    let final_score = blend(relevance, factors.score, hallucination_penalty);

    RankingResult {
        answer: RankedAnswer {
            id: format!("answer-{}", index + 1),
            rank: 0, // assigned after differentiation
            content: candidate.trim().to_string(),
            confidence: factors.score,
            source: None,
        },
        factors,
        relevance,
        hallucination_penalty,
        final_score,
    }
}

/// The final blend:
/// `clamp(round(relevance×0.3 + confidence×0.6 − hallucination), 0, 100)`.
fn blend(relevance: u8, confidence: u8, hallucination: u8) -> u8 {
    let blended = f64::from(relevance) * RELEVANCE_WEIGHT
        + f64::from(confidence) * CONFIDENCE_WEIGHT
        - f64::from(hallucination);
    (blended.round() as i32).clamp(0, 100) as u8
}

/// Enforce the minimum gap between adjacent scores, left to right.
///
/// Whenever an element sits within [`MIN_SCORE_GAP`] of its (possibly
/// already-lowered) predecessor, its final score is forced down to
/// `max(0, previous − MIN_SCORE_GAP)` and its displayed confidence is
/// reduced by the delta actually applied, both floored at 0. Consumes and
/// returns the sequence; input order is the sorted order.
fn apply_min_gap(sorted: Vec<RankingResult>) -> Vec<RankingResult> {
    let gap = i32::from(MIN_SCORE_GAP);
    let mut out: Vec<RankingResult> = Vec::with_capacity(sorted.len());

    for mut result in sorted {
        if let Some(previous) = out.last() {
            let prev_score = i32::from(previous.final_score);
            let current = i32::from(result.final_score);
            if prev_score - current < gap {
                let forced = (prev_score - gap).max(0);
                let delta = current - forced;
                result.final_score = forced as u8;
                result.answer.confidence =
                    (i32::from(result.answer.confidence) - delta).max(0) as u8;
            }
        }
        out.push(result);
    }

    out
}

/// Assign ranks 1..N in sequence order.
fn assign_ranks(results: Vec<RankingResult>) -> Vec<RankingResult> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, mut result)| {
            result.answer.rank = index as u32 + 1;
            result
        })
        .collect()
}
