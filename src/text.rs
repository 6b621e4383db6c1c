// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and keyword extraction.
//!
//! Every heuristic in this crate works on surface text, so they all funnel
//! through the same two primitives: [`normalize`] folds case, diacritics, and
//! whitespace so "Café" and "cafe" compare equal; [`extract_keywords`] reduces
//! a question to the content words worth looking for in an answer.
//!
//! Keyword rule: lowercase, punctuation becomes whitespace, split on
//! whitespace, drop tokens of three characters or fewer and anything in
//! [`STOP_WORDS`](crate::lexicon::STOP_WORDS). Duplicates survive extraction;
//! callers that need set semantics use [`distinct_keywords`].

use crate::lexicon::STOP_WORDS;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, and collapse
/// whitespace.
///
/// This keeps keyword matching honest across accented spellings:
/// - "Café" → "cafe"
/// - "naïve" → "naive"
/// - "résumé" → "resume"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization, e.g. WASM)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization for WASM (no unicode-normalization dependency).
/// Just lowercases and collapses whitespace. Assumes input is ASCII or
/// pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    // This covers the most common combining diacritical marks
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0C00}'..='\u{0C7F}' |  // Telugu (some combining marks)
        '\u{0900}'..='\u{097F}' |  // Devanagari (some combining marks)
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Replace everything that is not a word character or whitespace with a space.
///
/// Word characters are alphanumerics plus underscore, so "don't" tokenizes as
/// "don" and "t" rather than surviving as one token.
fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Extract content keywords from a question or answer.
///
/// Applies [`normalize`], strips punctuation to whitespace, splits, and keeps
/// tokens that are longer than three characters and not stop words.
/// Duplicates are preserved in input order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    strip_punctuation(&normalize(text))
        .split_whitespace()
        .filter(|word| word.chars().count() > 3 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// How many phrases from `list` occur as substrings of `haystack`, each
/// counted at most once. `haystack` is expected to be [`normalize`]d already.
pub(crate) fn count_phrases(haystack: &str, list: &[&str]) -> u32 {
    list.iter().filter(|phrase| haystack.contains(*phrase)).count() as u32
}

/// Distinct content keywords in first-seen order.
///
/// The overlap and relevance ratios are defined over the *set* of question
/// keywords; a question that repeats a word does not get to count it twice.
pub fn distinct_keywords(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for keyword in extract_keywords(text) {
        if !seen.contains(&keyword) {
            seen.push(keyword);
        }
    }
    seen
}
