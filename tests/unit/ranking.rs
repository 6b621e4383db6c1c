//! Ranking engine behavior through the public API.

use arbiter::{pad_candidates, rank_answers, verify_ranking, EXPECTED_CANDIDATES, MIN_SCORE_GAP};

use crate::common::{
    assert_gap_invariant, assert_rank_sequence, candidates, near_identical_candidates,
    refusal_answer, strong_answer, IDEAL_QUESTION,
};

#[test]
fn single_candidate_ranks_first_trivially() {
    let ranked = rank_answers(IDEAL_QUESTION, &candidates(&[&strong_answer()]));
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].answer.rank, 1);
    verify_ranking(&ranked).expect("single result must verify");
}

#[test]
fn results_carry_trimmed_content() {
    let ranked = rank_answers(IDEAL_QUESTION, &candidates(&["  padded answer  "]));
    assert_eq!(ranked[0].answer.content, "padded answer");
}

#[test]
fn source_defaults_to_none() {
    let ranked = rank_answers(IDEAL_QUESTION, &candidates(&[&strong_answer()]));
    assert_eq!(ranked[0].answer.source, None);
}

#[test]
fn forced_drops_cascade_through_a_tie_cluster() {
    let ranked = rank_answers("how do i fix my router connection", &near_identical_candidates());

    // all three tie pre-differentiation; the ratchet spaces them by the gap
    let top = ranked[0].final_score;
    assert_eq!(ranked[1].final_score, top - MIN_SCORE_GAP);
    assert_eq!(ranked[2].final_score, top - 2 * MIN_SCORE_GAP);

    // the displayed confidence drops by the same applied delta
    let raw = ranked[0].factors.score;
    assert_eq!(ranked[0].answer.confidence, raw);
    assert_eq!(ranked[1].answer.confidence, raw - MIN_SCORE_GAP);
    assert_eq!(ranked[2].answer.confidence, raw - 2 * MIN_SCORE_GAP);
}

#[test]
fn raw_factor_breakdown_survives_differentiation() {
    let ranked = rank_answers("how do i fix my router connection", &near_identical_candidates());

    // differentiation adjusts the displayed confidence, not the raw factors
    assert_eq!(ranked[0].factors, ranked[1].factors);
    assert_eq!(ranked[1].factors, ranked[2].factors);
}

#[test]
fn mixed_quality_field_keeps_natural_gaps() {
    let question = IDEAL_QUESTION;
    let strong = strong_answer();
    let refusal = refusal_answer();
    let input = candidates(&[
        strong.as_str(),
        "Check the help page for password questions.",
        refusal.as_str(),
    ]);
    let ranked = rank_answers(question, &input);

    assert_rank_sequence(&ranked);
    assert_gap_invariant(&ranked);
    assert_eq!(ranked[0].answer.id, "answer-1");
    assert_eq!(ranked.last().unwrap().answer.id, "answer-3");
}

#[test]
fn padded_duplicates_rank_behind_their_original() {
    let question = IDEAL_QUESTION;
    let padded = pad_candidates(vec![strong_answer()]);
    assert_eq!(padded.len(), EXPECTED_CANDIDATES);

    let ranked = rank_answers(question, &padded);
    assert_eq!(ranked[0].answer.id, "answer-1");
    assert_eq!(ranked[1].answer.id, "answer-2");
    assert_eq!(ranked[2].answer.id, "answer-3");
    assert_gap_invariant(&ranked);
}

#[test]
fn serialized_results_expose_the_published_fields() {
    let ranked = rank_answers(IDEAL_QUESTION, &candidates(&[&strong_answer()]));
    let json = serde_json::to_value(&ranked).expect("results must serialize");

    let first = &json[0];
    assert_eq!(first["answer"]["rank"], 1);
    assert!(first["answer"]["confidence"].is_u64());
    assert!(first["factors"]["keywordOverlap"].is_u64());
    assert!(first["finalScore"].is_u64());
    assert!(first["hallucinationPenalty"].is_u64());
}
