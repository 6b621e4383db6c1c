// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value objects the engine produces.
//!
//! Everything here is created fresh per ranking invocation and never mutated
//! afterwards; there is no caching layer and no persisted identity. Downstream
//! consumers keep only [`RankedAnswer`]; the factor breakdown exists so a
//! score is always explainable, not just asserted.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ConfidenceFactors**: every sub-score and the aggregate lie in `[0, 100]`;
//!   `clarity_penalty` lies in `[0, 30]`. All integers, consistently rounded.
//!
//! - **RankingResult**: `relevance` in `[0, 100]`, `hallucination_penalty` in
//!   `[0, 20]`, `final_score` in `[0, 100]`.
//!
//! - **Ranked sequences**: exactly one result per input candidate, ranks form
//!   `{1..N}` with no gaps or repeats, and adjacent final scores differ by at
//!   least [`MIN_SCORE_GAP`](crate::MIN_SCORE_GAP) unless the lower one is
//!   floored at 0.
//!
//! Rather than trusting yourself to remember these, run a ranked sequence
//! through [`verify_ranking`](crate::verify_ranking) - tests do.

use serde::{Deserialize, Serialize};

/// The four sub-scores plus the aggregated confidence for one
/// (question, answer) pair.
///
/// Produced by [`score_confidence`](crate::score_confidence). `score` is the
/// weighted aggregate of the three positive factors minus the clarity
/// penalty, clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceFactors {
    /// How many distinct question keywords the answer mentions, 0-100.
    pub keyword_overlap: u8,
    /// Length-based completeness, 0-100. Peaks in the 150-350 character band.
    pub completeness: u8,
    /// Formatting and organization signals, 0-100. Base 50 plus bonuses.
    pub structural_quality: u8,
    /// Hedging/filler/refusal deduction, 0-30.
    pub clarity_penalty: u8,
    /// Aggregated confidence, 0-100.
    pub score: u8,
}

/// The final answer record downstream consumers store and render.
///
/// The UI reads `rank`, `content`, and `confidence`; persistence stores the
/// whole record. `confidence` is the post-differentiation displayed value, so
/// it always agrees with the ordering that `rank` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedAnswer {
    /// Deterministic identifier derived from the candidate's input position
    /// ("answer-1" for the first candidate supplied, not the first ranked).
    pub id: String,
    /// Final rank, 1 = best. Ranks are unique and gapless across a result set.
    pub rank: u32,
    /// The candidate text, trimmed.
    pub content: String,
    /// Displayed confidence, 0-100, adjusted in step with the
    /// differentiation pass.
    pub confidence: u8,
    /// Where the candidate came from (a provider label). Supplied by the
    /// caller; the engine does not know or care how candidates were produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source: Option<String>,
}

/// Everything the ranking engine computed for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    /// The caller-facing answer record.
    pub answer: RankedAnswer,
    /// The feature scorer's breakdown for this candidate.
    pub factors: ConfidenceFactors,
    /// How directly the answer addresses the question, 0-100.
    pub relevance: u8,
    /// Refusal/uncertainty deduction, 0-20.
    pub hallucination_penalty: u8,
    /// Blended score the ordering is based on, 0-100.
    pub final_score: u8,
}
