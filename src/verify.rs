// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime checks for the guarantees a ranked sequence is supposed to carry.
//!
//! The engine promises a handful of invariants (documented ranges, gapless
//! ranks, the minimum score gap). Rather than trusting every call site to
//! remember them, [`verify_ranking`] re-checks a result sequence and reports
//! the first violation as a typed error. Tests run every ranked fixture
//! through it; the CLI exposes it behind `--verify`.
//!
//! | Check          | Invariant                                             |
//! |----------------|-------------------------------------------------------|
//! | Ranges         | sub-scores/aggregates in [0,100], penalties in caps   |
//! | Rank sequence  | result at position i carries rank i+1                 |
//! | Ordering       | final scores non-increasing in rank order             |
//! | Gap            | adjacent scores ≥ `MIN_SCORE_GAP` apart, or floor 0   |

use std::fmt;

use crate::scoring::ranking::MIN_SCORE_GAP;
use crate::scoring::{CLARITY_PENALTY_CAP, HALLUCINATION_PENALTY_CAP};
use crate::types::RankingResult;

/// Error type for ranking invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A score field exceeds its documented maximum.
    ScoreOutOfRange {
        position: usize,
        field: &'static str,
        value: u8,
        max: u8,
    },
    /// The result at `position` does not carry rank `position + 1`.
    RankMismatch { position: usize, rank: u32 },
    /// Final scores are not non-increasing in rank order.
    NotSortedByScore { position: usize },
    /// Adjacent final scores sit closer than the minimum gap without the
    /// lower one being floored at 0.
    GapTooSmall { position: usize, gap: u8 },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ScoreOutOfRange {
                position,
                field,
                value,
                max,
            } => {
                write!(
                    f,
                    "result {} field {} is {} but the documented maximum is {}",
                    position, field, value, max
                )
            }
            InvariantError::RankMismatch { position, rank } => {
                write!(f, "result at position {} carries rank {}", position, rank)
            }
            InvariantError::NotSortedByScore { position } => {
                write!(f, "final scores increase at position {}", position)
            }
            InvariantError::GapTooSmall { position, gap } => {
                write!(
                    f,
                    "gap of {} before position {} is below the minimum of {}",
                    gap, position, MIN_SCORE_GAP
                )
            }
        }
    }
}

/// Check every published guarantee over a ranked result sequence.
///
/// Returns the first violation found, scanning positions in order. A valid
/// empty sequence passes trivially.
pub fn verify_ranking(results: &[RankingResult]) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        check_ranges(position, result)?;

        let expected_rank = position as u32 + 1;
        if result.answer.rank != expected_rank {
            return Err(InvariantError::RankMismatch {
                position,
                rank: result.answer.rank,
            });
        }
    }

    for (position, pair) in results.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.final_score > previous.final_score {
            return Err(InvariantError::NotSortedByScore {
                position: position + 1,
            });
        }
        let gap = previous.final_score - current.final_score;
        if gap < MIN_SCORE_GAP && current.final_score != 0 {
            return Err(InvariantError::GapTooSmall {
                position: position + 1,
                gap,
            });
        }
    }

    Ok(())
}

fn check_ranges(position: usize, result: &RankingResult) -> Result<(), InvariantError> {
    let bounded: [(&'static str, u8, u8); 8] = [
        ("keywordOverlap", result.factors.keyword_overlap, 100),
        ("completeness", result.factors.completeness, 100),
        ("structuralQuality", result.factors.structural_quality, 100),
        (
            "clarityPenalty",
            result.factors.clarity_penalty,
            CLARITY_PENALTY_CAP as u8,
        ),
        ("confidence", result.factors.score, 100),
        ("relevance", result.relevance, 100),
        (
            "hallucinationPenalty",
            result.hallucination_penalty,
            HALLUCINATION_PENALTY_CAP as u8,
        ),
        ("finalScore", result.final_score, 100),
    ];

    for (field, value, max) in bounded {
        if value > max {
            return Err(InvariantError::ScoreOutOfRange {
                position,
                field,
                value,
                max,
            });
        }
    }
    Ok(())
}
