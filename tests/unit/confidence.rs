//! Feature scorer behavior through the public API.

use arbiter::{clarity_penalty, completeness, keyword_overlap, score_confidence, structural_quality};

use crate::common::{hedged_answer, terse_answer, IDEAL_QUESTION};

#[test]
fn completeness_boundaries_are_exact() {
    // band edges, one character to either side
    assert_eq!(completeness(&"x".repeat(149)), 99);
    assert_eq!(completeness(&"x".repeat(150)), 100);
    assert_eq!(completeness(&"x".repeat(350)), 100);
    assert_eq!(completeness(&"x".repeat(351)), 100); // round(1/150*20) = 0
    assert_eq!(completeness(&"x".repeat(500)), 80);
    // the too-long branch restarts its decay from 100, so the curve jumps
    // back up across the 500 boundary before falling toward the 40 floor
    assert_eq!(completeness(&"x".repeat(501)), 100);
    assert_eq!(completeness(&"x".repeat(700)), 40);
    assert_eq!(completeness(&"x".repeat(99)), 69);
    assert_eq!(completeness(&"x".repeat(100)), 70);
}

#[test]
fn completeness_counts_characters_not_bytes() {
    // 150 multibyte characters must land in the ideal band
    let answer = "é".repeat(150);
    assert_eq!(completeness(&answer), 100);
}

#[test]
fn terse_answers_fall_off_steeply_verbose_ones_gently() {
    let terse = completeness(&terse_answer());
    let verbose = completeness(&"word ".repeat(160)); // 800 chars
    assert!(terse < 50, "terse answer scored {}", terse);
    assert!(verbose >= 40, "verbose answer scored {}", verbose);
}

#[test]
fn structural_bonuses_cap_at_100() {
    // every bonus fires: list, steps, paragraphs, sentences, lead-in
    let answer = "Yes. Here is how.\n\n1. First step one.\n2. Second step two.\n3. Third step three.";
    assert_eq!(structural_quality(answer), 100);
}

#[test]
fn indented_bullets_count_as_lists() {
    let with_bullet = structural_quality("Consider:\n  • option one\n");
    let without = structural_quality("Consider:\n  option one\n");
    assert_eq!(with_bullet, without + 20);
}

#[test]
fn overlap_is_substring_based() {
    // "password" the keyword matches inside "passwords"
    let score = keyword_overlap("where did my password go", "passwords are stored locally");
    assert_eq!(score, 100); // 1/1 keyword matched, ratio 1.0 > 0.8 bonus capped
}

#[test]
fn overlap_ignores_question_punctuation_and_case() {
    let score = keyword_overlap("RESET, password!", "how to reset a password");
    assert_eq!(score, 100);
}

#[test]
fn hedged_answers_accumulate_vague_penalties() {
    let penalty = clarity_penalty(&hedged_answer());
    assert!(penalty >= 15, "hedged answer penalty {} too low", penalty);
    assert!(penalty <= 30);
}

#[test]
fn aggregate_reflects_the_documented_weights() {
    let factors = score_confidence(IDEAL_QUESTION, "Reset the password.");
    let expected = (f64::from(factors.keyword_overlap) * 0.4
        + f64::from(factors.completeness) * 0.3
        + f64::from(factors.structural_quality) * 0.2)
        .round() as i32
        - i32::from(factors.clarity_penalty);
    assert_eq!(i32::from(factors.score), expected.clamp(0, 100));
}
