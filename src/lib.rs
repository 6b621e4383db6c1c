//! Deterministic scoring and ranking for candidate answers.
//!
//! Given a question and a small set of candidate answer texts (conventionally
//! three), this crate computes a multi-factor quality score for each, orders
//! them, and guarantees the published ranking is stable and visibly
//! differentiated - no near-ties. All scoring is rule-based and computed from
//! surface text features: character counts, line shapes, word-set overlap.
//! No models, no randomness, no clock, no I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ lexicon.rs │────▶│   text.rs    │────▶│   scoring/   │
//! │ (word and  │     │ (normalize,  │     │ (confidence, │
//! │ phrase     │     │  keyword     │     │  relevance,  │
//! │ sets)      │     │  extraction) │     │  ranking)    │
//! └────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify.rs                      │
//! │  (re-checks ranges, rank sequence, gap invariant)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is total over its input domain: any strings, including empty
//! ones, produce defined scores rather than errors. It is also synchronous,
//! single-threaded, and side-effect-free, so independent invocations can run
//! concurrently with no coordination.
//!
//! # Usage
//!
//! ```
//! use arbiter::{rank_answers, score_confidence};
//!
//! let question = "How do I reset my password?";
//! let candidates = vec![
//!     "To reset your password, open settings and follow the reset email.".to_string(),
//!     "i cannot help with that".to_string(),
//! ];
//!
//! let ranked = rank_answers(question, &candidates);
//! assert_eq!(ranked[0].answer.rank, 1);
//! assert!(ranked[0].final_score > ranked[1].final_score);
//!
//! let factors = score_confidence(question, &candidates[0]);
//! assert!(factors.score <= 100);
//! ```

// Module declarations
pub mod lexicon;
mod mock;
mod scoring;
pub mod testing;
mod text;
mod types;
mod verify;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use mock::{mock_candidates, pad_candidates, EXPECTED_CANDIDATES};
pub use scoring::ranking::{rank_answers, CONFIDENCE_WEIGHT, MIN_SCORE_GAP, RELEVANCE_WEIGHT};
pub use scoring::{
    clarity_penalty, completeness, hallucination_penalty, keyword_overlap, relevance,
    score_confidence, structural_quality, CLARITY_PENALTY_CAP, COMPLETENESS_WEIGHT,
    HALLUCINATION_PENALTY_CAP, KEYWORD_OVERLAP_WEIGHT, NEUTRAL_OVERLAP_SCORE,
    NEUTRAL_RELEVANCE_SCORE, STRUCTURAL_QUALITY_WEIGHT,
};
pub use text::{distinct_keywords, extract_keywords, normalize};
pub use types::{ConfidenceFactors, RankedAnswer, RankingResult};
pub use verify::{verify_ranking, InvariantError};

#[cfg(test)]
mod tests {
    //! Cross-module behavior tests plus property tests for the engine's
    //! published guarantees. The named calibration scenarios live in
    //! `tests/integration.rs`; component details live next to their modules.

    use super::*;
    use proptest::prelude::*;
    use proptest::string::string_regex;

    // =========================================================================
    // INTEGRATION TESTS
    // =========================================================================

    #[test]
    fn keyword_heavy_answer_beats_unrelated_answer() {
        let question = "How do I configure the backup schedule?";
        let on_topic = "Configure the backup schedule from the admin panel settings page.";
        let off_topic = "Weather patterns shift noticeably between coastal regions every year.";

        let candidates = testing::candidates(&[off_topic, on_topic]);
        let ranked = rank_answers(question, &candidates);

        assert_eq!(ranked[0].answer.id, "answer-2");
        assert!(
            ranked[0].factors.keyword_overlap > ranked[1].factors.keyword_overlap,
            "on-topic answer should win keyword overlap"
        );
    }

    #[test]
    fn empty_question_falls_back_to_neutral_signals() {
        let factors = score_confidence("", "A perfectly reasonable answer to nothing.");
        assert_eq!(factors.keyword_overlap, NEUTRAL_OVERLAP_SCORE);
        assert_eq!(relevance("", "anything"), NEUTRAL_RELEVANCE_SCORE);
    }

    #[test]
    fn empty_answer_is_scored_not_rejected() {
        let factors = score_confidence("How do I reset my password?", "");
        assert!(factors.completeness <= 30);
        assert_eq!(factors.structural_quality, 50);
        assert!(factors.score <= 100);
    }

    #[test]
    fn displayed_confidence_matches_final_score_ordering() {
        let text = "The fix is to restart the gateway and clear the local cache.";
        let candidates = testing::candidates(&[text, text, text]);
        let ranked = rank_answers("how do i fix the gateway", &candidates);

        for pair in ranked.windows(2) {
            assert!(pair[0].answer.confidence >= pair[1].answer.confidence);
        }
    }

    // =========================================================================
    // PROPERTY TESTS
    // =========================================================================

    /// Free-form answer text: words, punctuation, list markers, newlines.
    fn answer_strategy() -> impl Strategy<Value = String> {
        string_regex("[a-zA-Z0-9 .,!?\\-\n]{0,600}").unwrap()
    }

    fn question_strategy() -> impl Strategy<Value = String> {
        string_regex("[a-zA-Z ?]{0,80}").unwrap()
    }

    fn candidate_set_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(answer_strategy(), 1..6)
    }

    proptest! {
        #[test]
        fn prop_confidence_is_deterministic(
            question in question_strategy(),
            answer in answer_strategy(),
        ) {
            prop_assert_eq!(
                score_confidence(&question, &answer),
                score_confidence(&question, &answer)
            );
        }

        #[test]
        fn prop_factors_stay_in_documented_ranges(
            question in question_strategy(),
            answer in answer_strategy(),
        ) {
            let factors = score_confidence(&question, &answer);
            prop_assert!(factors.keyword_overlap <= 100);
            prop_assert!(factors.completeness <= 100);
            prop_assert!(factors.structural_quality <= 100);
            prop_assert!(factors.clarity_penalty <= CLARITY_PENALTY_CAP as u8);
            prop_assert!(factors.score <= 100);
        }

        #[test]
        fn prop_ranked_output_always_verifies(
            question in question_strategy(),
            candidates in candidate_set_strategy(),
        ) {
            let ranked = rank_answers(&question, &candidates);
            prop_assert_eq!(ranked.len(), candidates.len());
            prop_assert_eq!(verify_ranking(&ranked), Ok(()));
        }

        #[test]
        fn prop_ranking_is_deterministic(
            question in question_strategy(),
            candidates in candidate_set_strategy(),
        ) {
            prop_assert_eq!(
                rank_answers(&question, &candidates),
                rank_answers(&question, &candidates)
            );
        }
    }
}
