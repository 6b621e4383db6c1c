//! Relevance and hallucination behavior through the public API.

use arbiter::{hallucination_penalty, relevance, NEUTRAL_RELEVANCE_SCORE};

#[test]
fn relevance_full_keyword_match_is_80_before_bonuses() {
    // no "what"/"how"/"why" in the question, so no bonus can fire
    let score = relevance(
        "explain database migrations please",
        "database migrations move schema changes between environments",
    );
    // keywords: explain, database, migrations, please -> 3 of 4 matched? no:
    // "explain" and "please" are absent, so 2 of 4 -> 40
    assert_eq!(score, 40);
}

#[test]
fn relevance_neutral_for_keyword_free_questions() {
    assert_eq!(relevance("how so?", "an answer"), NEUTRAL_RELEVANCE_SCORE);
}

#[test]
fn all_three_bonuses_can_stack() {
    let question = "what is deployment and how does it work and why does deployment succeed";
    // full keyword coverage plus a "what" opener, a method word, and a
    // causal connective
    let answer = "the deployment process does work and does succeed because automation";
    let score = relevance(question, answer);
    // keywords: deployment, does, work, succeed -> "does" is a stop word;
    // deployment/work/succeed all matched -> base 80, bonuses +30, cap 100
    assert_eq!(score, 100);
}

#[test]
fn what_bonus_needs_a_following_word() {
    let question = "what is the fastest compression codec";
    let bare = relevance(question, "it");
    let followed = relevance(question, "it depends");
    assert_eq!(followed, bare + 10);
}

#[test]
fn hallucination_penalty_is_zero_for_assertive_text() {
    assert_eq!(
        hallucination_penalty("The codec finishes in eleven milliseconds."),
        0
    );
}

#[test]
fn refusals_and_qualifiers_accumulate_independently() {
    // one refusal (5) + two qualifiers (4)
    let answer = "i'm not sure, maybe check the logs, it could be the disk";
    assert_eq!(hallucination_penalty(answer), 9);
}

#[test]
fn qualifier_cap_applies_before_the_total_cap() {
    // seven qualifiers would be 14 raw; capped to 10, plus one refusal = 15
    let answer =
        "i think it might be this, or could be that, possibly, perhaps, maybe, probably - i don't know";
    assert_eq!(hallucination_penalty(answer), 15);
}
