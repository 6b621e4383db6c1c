// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed word and phrase lists the scoring heuristics match against.
//!
//! Everything here is a named constant slice so the lists can be tuned in one
//! place and tests can enumerate membership. Scoring semantics live in
//! `scoring`; this module only says *what* the scorer looks for, never what it
//! does about a match.
//!
//! All matching against these lists happens on lowercased text. Multi-word
//! phrases are matched as substrings of the whole answer; single words in
//! `STOP_WORDS` are matched against whole tokens.
//!
//! # List inventory
//!
//! | Constant               | Size | Matched how        | Consumed by              |
//! |------------------------|------|--------------------|--------------------------|
//! | `STOP_WORDS`           | 52   | whole token        | keyword extraction       |
//! | `VAGUE_PHRASES`        | 12   | substring          | clarity penalty          |
//! | `FILLER_PHRASES`       | 7    | substring          | clarity penalty          |
//! | `REFUSAL_PHRASES_CORE` | 6    | substring          | clarity penalty          |
//! | `REFUSAL_PHRASES`      | 10   | substring          | hallucination penalty    |
//! | `VAGUE_QUALIFIERS`     | 9    | substring          | hallucination penalty    |
//! | `DIRECT_LEAD_INS`      | 10   | answer prefix      | structural quality       |
//! | `WHAT_LEAD_INS`        | 6    | first token        | relevance bonus          |
//! | `METHOD_WORDS`         | 5    | substring          | relevance bonus          |
//! | `CAUSAL_CONNECTIVES`   | 5    | substring          | relevance bonus          |

/// Common English function words excluded from keyword extraction.
///
/// Articles, conjunctions, auxiliaries, interrogatives, and demonstratives.
/// Entries of three characters or fewer are already removed by the length
/// filter; they stay in the list so the set is complete on its own terms.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "can", "this", "that",
    "these", "those", "what", "which", "who", "whom", "whose", "where", "when", "why", "how",
    "if", "then", "than",
];

/// Hedging phrases that signal the answer is unsure of itself.
///
/// Each distinct phrase present costs 3 clarity points.
pub const VAGUE_PHRASES: &[&str] = &[
    "i think", "i believe", "i guess", "maybe", "perhaps", "might be", "could be", "possibly",
    "sort of", "kind of", "a bit", "somewhat",
];

/// Conversational filler. Each distinct entry present costs 1 clarity point.
///
/// Matched as substrings, so short entries fire inside larger words too
/// ("um" inside "number"). That looseness is inherited behavior the score
/// thresholds were tuned against; tighten it and every calibration moves.
pub const FILLER_PHRASES: &[&str] = &[
    "um", "uh", "like", "you know", "actually", "basically", "literally",
];

/// Refusal and uncertainty admissions checked by the clarity penalty.
///
/// Each distinct phrase present costs 5 clarity points. Note "i cannot" is a
/// prefix of "i cannot provide"; an answer containing the longer phrase
/// matches both, and both are counted.
pub const REFUSAL_PHRASES_CORE: &[&str] = &[
    "i cannot",
    "i don't know",
    "i'm not sure",
    "i have no idea",
    "i'm unable to",
    "i cannot provide",
];

/// The full refusal family checked by the hallucination penalty.
///
/// Superset of [`REFUSAL_PHRASES_CORE`]. The ranking side casts a wider net
/// than the per-answer clarity check.
pub const REFUSAL_PHRASES: &[&str] = &[
    "i cannot",
    "i don't know",
    "i'm not sure",
    "i have no idea",
    "i'm unable to",
    "i cannot provide",
    "i don't have access",
    "i cannot answer",
    "i cannot determine",
    "i cannot verify",
];

/// Vague qualifiers checked by the hallucination penalty (2 points each,
/// contribution capped at 10).
pub const VAGUE_QUALIFIERS: &[&str] = &[
    "might be", "could be", "possibly", "perhaps", "maybe", "i think", "i believe", "i guess",
    "probably",
];

/// Lead-in words that suggest the answer addresses the question head-on.
///
/// Checked against the start of the trimmed answer, case-insensitively, as a
/// plain prefix ("item ..." matches via "it").
pub const DIRECT_LEAD_INS: &[&str] = &[
    "yes", "no", "the", "it", "this", "that", "in", "to", "for", "with",
];

/// Pronoun/article openers rewarded when the question asks "what".
///
/// Matched against the answer's first whitespace-delimited token, which must
/// be followed by at least one more token.
pub const WHAT_LEAD_INS: &[&str] = &["it", "this", "that", "the", "a", "an"];

/// Procedure vocabulary rewarded when the question asks "how".
pub const METHOD_WORDS: &[&str] = &["step", "method", "way", "process", "approach"];

/// Causal connectives rewarded when the question asks "why".
pub const CAUSAL_CONNECTIVES: &[&str] = &["because", "reason", "due to", "since", "as a result"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in STOP_WORDS {
            assert_eq!(*word, word.to_lowercase(), "stop word not lowercase");
            assert!(seen.insert(*word), "duplicate stop word: {}", word);
        }
        assert!(STOP_WORDS.len() >= 45);
    }

    #[test]
    fn refusal_core_is_subset_of_refusal_family() {
        for phrase in REFUSAL_PHRASES_CORE {
            assert!(
                REFUSAL_PHRASES.contains(phrase),
                "core refusal phrase missing from family: {}",
                phrase
            );
        }
        assert_eq!(REFUSAL_PHRASES_CORE.len(), 6);
        assert_eq!(REFUSAL_PHRASES.len(), 10);
    }

    #[test]
    fn list_sizes_match_documented_inventory() {
        assert_eq!(VAGUE_PHRASES.len(), 12);
        assert_eq!(FILLER_PHRASES.len(), 7);
        assert_eq!(VAGUE_QUALIFIERS.len(), 9);
        assert_eq!(DIRECT_LEAD_INS.len(), 10);
        assert_eq!(WHAT_LEAD_INS.len(), 6);
        assert_eq!(METHOD_WORDS.len(), 5);
        assert_eq!(CAUSAL_CONNECTIVES.len(), 5);
    }

    #[test]
    fn phrase_lists_are_lowercase() {
        let all = VAGUE_PHRASES
            .iter()
            .chain(FILLER_PHRASES)
            .chain(REFUSAL_PHRASES)
            .chain(VAGUE_QUALIFIERS)
            .chain(DIRECT_LEAD_INS)
            .chain(WHAT_LEAD_INS)
            .chain(METHOD_WORDS)
            .chain(CAUSAL_CONNECTIVES);
        for phrase in all {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase not lowercase");
        }
    }
}
