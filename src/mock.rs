// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A deterministic stand-in for the text-generation provider.
//!
//! The engine does not know or care where candidate answers come from; in
//! production they arrive from a language-model provider that lives outside
//! this crate. This module supplies that collaborator's test double: three
//! texturally distinct candidates templated on the question's own keywords,
//! with no I/O, no latency, and no randomness, so demo output and tests are
//! reproducible down to the byte.
//!
//! The padding policy also lives here rather than in the engine: when
//! generation under-produces, the contract says to repeat the first
//! available candidate until the conventional count of three is reached.

use crate::text::distinct_keywords;

/// How many candidates the surrounding system conventionally supplies.
pub const EXPECTED_CANDIDATES: usize = 3;

/// Produce three deterministic candidate answers for a question.
///
/// The three are deliberately uneven in quality - a structured step-by-step
/// answer, a plain prose answer, and a hedged one - so ranking them always
/// has something to separate.
pub fn mock_candidates(question: &str) -> [String; 3] {
    let keywords = distinct_keywords(question);
    let topic = keywords
        .first()
        .map(String::as_str)
        .unwrap_or("this topic")
        .to_string();
    let detail = keywords
        .get(1)
        .map(String::as_str)
        .unwrap_or("the details")
        .to_string();

    let structured = format!(
        "To handle {topic}, work through these steps:\n\
         1. Review how {topic} is set up today and note anything unusual.\n\
         2. Apply the change you need, keeping {detail} in mind.\n\
         3. Confirm the outcome matches what you expected.\n\n\
         The whole process takes a few minutes and is safe to repeat."
    );

    let prose = format!(
        "The short answer is that {topic} comes down to a few essentials. \
         Start from the documented defaults, adjust for {detail}, and verify \
         the result before moving on. Most problems trace back to a skipped \
         verification rather than to {topic} itself."
    );

    let hedged = format!(
        "I think {topic} could be the issue here, but I'm not sure. Maybe \
         check {detail}, or perhaps something else entirely - it is kind of \
         hard to say without more context."
    );

    [structured, prose, hedged]
}

/// Pad an under-produced candidate set by repeating the first candidate.
///
/// Returns the input unchanged when it already holds
/// [`EXPECTED_CANDIDATES`] or more, and returns an empty `Vec` unchanged -
/// there is nothing to repeat, and guaranteeing at least one candidate is
/// the caller's contract, not this helper's.
pub fn pad_candidates(mut candidates: Vec<String>) -> Vec<String> {
    if candidates.is_empty() {
        return candidates;
    }
    while candidates.len() < EXPECTED_CANDIDATES {
        candidates.push(candidates[0].clone());
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ranking::rank_answers;
    use crate::verify::verify_ranking;

    #[test]
    fn mock_candidates_are_deterministic() {
        let question = "How do I reset my password?";
        assert_eq!(mock_candidates(question), mock_candidates(question));
    }

    #[test]
    fn mock_candidates_mention_question_keywords() {
        let [structured, prose, hedged] = mock_candidates("How do I reset my password?");
        for candidate in [&structured, &prose, &hedged] {
            assert!(candidate.contains("reset"), "missing topic in: {}", candidate);
        }
    }

    #[test]
    fn mock_candidates_survive_keyword_free_questions() {
        let [structured, _, _] = mock_candidates("Why?");
        assert!(structured.contains("this topic"));
    }

    #[test]
    fn mock_output_ranks_cleanly() {
        let question = "How do I reset my password?";
        let candidates = mock_candidates(question).to_vec();
        let ranked = rank_answers(question, &candidates);
        assert_eq!(verify_ranking(&ranked), Ok(()));
        // the hedged candidate should not win
        assert_ne!(ranked[0].answer.id, "answer-3");
    }

    #[test]
    fn padding_repeats_the_first_candidate() {
        let padded = pad_candidates(vec!["only one".to_string()]);
        assert_eq!(padded.len(), EXPECTED_CANDIDATES);
        assert!(padded.iter().all(|candidate| candidate == "only one"));
    }

    #[test]
    fn padding_leaves_full_and_empty_sets_alone() {
        assert!(pad_candidates(Vec::new()).is_empty());
        let full = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(pad_candidates(full.clone()), full);
    }
}
