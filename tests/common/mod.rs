//! Shared test utilities and fixtures.

#![allow(dead_code)]

use arbiter::{RankingResult, MIN_SCORE_GAP};

// Re-export canonical test fixtures from arbiter::testing
pub use arbiter::testing::{
    candidates, hedged_answer, refusal_answer, strong_answer, terse_answer, IDEAL_QUESTION,
};

/// Three answers differing only in punctuation, equal in length, so every
/// raw signal ties exactly - which is exactly what the differentiation pass
/// exists to separate.
pub fn near_identical_candidates() -> Vec<String> {
    candidates(&[
        "Restart the router, then check the cable connection carefully before retrying the setup process again today.",
        "Restart the router; then check the cable connection carefully before retrying the setup process again today.",
        "Restart the router, then check the cable connection carefully before retrying the setup process again today!",
    ])
}

/// Assert the adjacent-gap guarantee over a ranked sequence, with the
/// floor-at-zero exception.
pub fn assert_gap_invariant(ranked: &[RankingResult]) {
    for (position, pair) in ranked.windows(2).enumerate() {
        let gap = i32::from(pair[0].final_score) - i32::from(pair[1].final_score);
        assert!(
            gap >= i32::from(MIN_SCORE_GAP) || pair[1].final_score == 0,
            "gap {} at position {} violates the minimum without the floor",
            gap,
            position + 1
        );
    }
}

/// Assert ranks are exactly 1..N in sequence order.
pub fn assert_rank_sequence(ranked: &[RankingResult]) {
    for (index, result) in ranked.iter().enumerate() {
        assert_eq!(
            result.answer.rank,
            index as u32 + 1,
            "rank at position {} is {}",
            index,
            result.answer.rank
        );
    }
}
