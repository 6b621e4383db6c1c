// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance and hallucination signals for the ranking engine.
//!
//! Confidence asks "is this a good answer?"; relevance asks "is it an answer
//! to *this* question?". The two overlap deliberately - keyword coverage
//! feeds both - but relevance adds question-type heuristics: a "how"
//! question wants procedure words, a "why" question wants causal
//! connectives, a "what" question wants an answer that opens by naming the
//! thing.
//!
//! The hallucination penalty is the ranking-side deduction for refusal and
//! uncertainty language. It casts a wider net than the clarity penalty's
//! refusal check ([`REFUSAL_PHRASES`] vs the core list) because an answer
//! that dodges the question should lose ranking ground even when it is
//! otherwise well written.

use crate::lexicon::{
    CAUSAL_CONNECTIVES, METHOD_WORDS, REFUSAL_PHRASES, VAGUE_QUALIFIERS, WHAT_LEAD_INS,
};
use crate::text::{count_phrases, distinct_keywords, normalize};

// =============================================================================
// RELEVANCE CONSTANTS
// =============================================================================

/// Returned when the question has no content keywords to match.
pub const NEUTRAL_RELEVANCE_SCORE: u8 = 50;

/// Keyword match ratio is scaled by this (a full match earns 80 before
/// bonuses - the last 20 points must come from actually answering).
pub const RELEVANCE_RATIO_SCALE: f64 = 80.0;

/// Bonus per direct-answer heuristic that fires. Independently stackable;
/// the final score is capped at 100.
pub const DIRECT_ANSWER_BONUS: f64 = 10.0;

/// Penalty per refusal/uncertainty phrase found.
pub const REFUSAL_HALLUCINATION_PENALTY: u32 = 5;

/// Penalty per vague qualifier found.
pub const QUALIFIER_PENALTY: u32 = 2;

/// The qualifier contribution alone never exceeds this.
pub const QUALIFIER_PENALTY_CAP: u32 = 10;

/// The hallucination penalty never exceeds this.
pub const HALLUCINATION_PENALTY_CAP: u32 = 20;

/// How directly the answer addresses the question, 0-100.
///
/// Re-extracts the question's distinct content keywords (same length > 3,
/// non-stop-word rule as the feature scorer; [`NEUTRAL_RELEVANCE_SCORE`] when
/// none remain), scales the matched ratio by [`RELEVANCE_RATIO_SCALE`], then
/// adds [`DIRECT_ANSWER_BONUS`] for each question-type heuristic that fires:
///
/// - a "what" question answered with a pronoun/article opener,
/// - a "how" question answered with method/step/process vocabulary,
/// - a "why" question answered with a causal connective.
///
/// Capped at 100.
pub fn relevance(question: &str, answer: &str) -> u8 {
    let keywords = distinct_keywords(question);
    if keywords.is_empty() {
        return NEUTRAL_RELEVANCE_SCORE;
    }

    let question_fold = normalize(question);
    let answer_fold = normalize(answer);

    let matched = keywords
        .iter()
        .filter(|keyword| answer_fold.contains(keyword.as_str()))
        .count();
    let ratio = matched as f64 / keywords.len() as f64;
    let base = (ratio * RELEVANCE_RATIO_SCALE).min(100.0);

    let mut bonus = 0.0;
    if question_fold.contains("what") && opens_with_what_lead_in(&answer_fold) {
        bonus += DIRECT_ANSWER_BONUS;
    }
    if question_fold.contains("how")
        && METHOD_WORDS.iter().any(|word| answer_fold.contains(word))
    {
        bonus += DIRECT_ANSWER_BONUS;
    }
    if question_fold.contains("why")
        && CAUSAL_CONNECTIVES
            .iter()
            .any(|connective| answer_fold.contains(connective))
    {
        bonus += DIRECT_ANSWER_BONUS;
    }

    (base + bonus).min(100.0).round() as u8
}

/// Refusal/uncertainty deduction for ranking, 0-20.
///
/// [`REFUSAL_HALLUCINATION_PENALTY`] per refusal phrase from the full
/// [`REFUSAL_PHRASES`] family, plus [`QUALIFIER_PENALTY`] per vague
/// qualifier with the qualifier contribution capped at
/// [`QUALIFIER_PENALTY_CAP`]; the total is capped at
/// [`HALLUCINATION_PENALTY_CAP`].
pub fn hallucination_penalty(answer: &str) -> u8 {
    let haystack = normalize(answer);

    let refusals = count_phrases(&haystack, REFUSAL_PHRASES) * REFUSAL_HALLUCINATION_PENALTY;
    let qualifiers =
        (count_phrases(&haystack, VAGUE_QUALIFIERS) * QUALIFIER_PENALTY).min(QUALIFIER_PENALTY_CAP);

    (refusals + qualifiers).min(HALLUCINATION_PENALTY_CAP) as u8
}

/// Does the answer open with a pronoun/article followed by another word?
///
/// Token-based: the first whitespace-delimited token must equal one of
/// [`WHAT_LEAD_INS`] and must not be the only token ("It depends" matches,
/// a bare "It" does not).
fn opens_with_what_lead_in(answer_fold: &str) -> bool {
    let mut tokens = answer_fold.split_whitespace();
    match tokens.next() {
        Some(first) => WHAT_LEAD_INS.contains(&first) && tokens.next().is_some(),
        None => false,
    }
}
