// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind answer confidence.
//!
//! Four independent sub-scores, each defensible on its own, blended into one
//! 0-100 number. Keyword overlap carries the most weight because an answer
//! that never mentions what was asked is not an answer; completeness and
//! structure reward the shape of a good explanation; the clarity penalty
//! subtracts for hedging, filler, and refusals.
//!
//! Everything is integer-valued, deterministic, and total: empty or
//! degenerate text produces low but defined scores, never an error.
//!
//! # Weights (the scoring policy, in one table)
//!
//! | Factor             | Weight | Why this value                             |
//! |--------------------|--------|--------------------------------------------|
//! | Keyword overlap    | 0.4    | Addressing the question dominates          |
//! | Completeness       | 0.3    | Enough detail, without rambling            |
//! | Structural quality | 0.2    | Organization is visible quality            |
//! | Clarity penalty    | 0.1    | Share of the budget hedging can eat into   |
//!
//! The three positive weights plus the clarity share sum to 1.0. The penalty
//! itself is subtracted point-for-point (capped at
//! [`CLARITY_PENALTY_CAP`]), not scaled; the 0.1 entry records its share of
//! the scoring budget, and [`score_confidence`] has a test pinning the sum.

use std::collections::HashMap;

use crate::lexicon::{
    DIRECT_LEAD_INS, FILLER_PHRASES, REFUSAL_PHRASES_CORE, VAGUE_PHRASES,
};
use crate::text::{count_phrases, distinct_keywords, normalize};
use crate::types::ConfidenceFactors;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// Tuned against the calibration scenarios in tests/integration.rs. Changing
// any of these shifts every published confidence number, so treat them as
// policy, not implementation detail.

/// Weight of the keyword overlap sub-score in the aggregate.
pub const KEYWORD_OVERLAP_WEIGHT: f64 = 0.4;

/// Weight of the completeness sub-score in the aggregate.
pub const COMPLETENESS_WEIGHT: f64 = 0.3;

/// Weight of the structural quality sub-score in the aggregate.
pub const STRUCTURAL_QUALITY_WEIGHT: f64 = 0.2;

/// The clarity penalty's share of the scoring budget. Documentation constant:
/// the penalty is subtracted point-for-point, not multiplied by this.
pub const CLARITY_SHARE: f64 = 0.1;

/// Returned when the question has no content keywords to overlap with.
pub const NEUTRAL_OVERLAP_SCORE: u8 = 50;

/// Overlap ratio above which the bonus applies.
pub const HIGH_OVERLAP_THRESHOLD: f64 = 0.8;

/// Bonus added when overlap exceeds [`HIGH_OVERLAP_THRESHOLD`], capped at 100.
pub const HIGH_OVERLAP_BONUS: f64 = 10.0;

/// Ideal answer length band, in characters: full completeness marks.
pub const IDEAL_MIN_CHARS: usize = 150;
/// Upper edge of the ideal length band.
pub const IDEAL_MAX_CHARS: usize = 350;
/// Below this, an answer is scored as too short outright.
pub const SHORT_CHARS: usize = 100;
/// Above this, an answer is scored as too long outright.
pub const LONG_CHARS: usize = 500;
/// Completeness never drops below this for short answers.
pub const SHORT_FLOOR: f64 = 30.0;
/// Completeness never drops below this for long answers.
pub const LONG_FLOOR: f64 = 40.0;

/// Structural quality starts here; bonuses add on top.
pub const STRUCTURAL_BASE: u8 = 50;
/// Bonus for a bulleted or numbered list line.
pub const LIST_BONUS: u8 = 20;
/// Bonus for numbered step markers anywhere in the body.
pub const NUMBERED_STEPS_BONUS: u8 = 15;
/// Bonus for 1-3 blank-line paragraph breaks.
pub const PARAGRAPH_BONUS: u8 = 10;
/// Bonus for a sentence count between 3 and 8 inclusive.
pub const SENTENCE_BONUS: u8 = 10;
/// Bonus for opening with a direct-answer lead-in.
pub const LEAD_IN_BONUS: u8 = 5;

/// Clarity points per distinct vague/hedging phrase.
pub const VAGUE_PHRASE_PENALTY: u32 = 3;
/// Clarity points per over-repeated word (see [`REPEAT_THRESHOLD`]).
pub const REPEATED_WORD_PENALTY: u32 = 2;
/// Clarity points per distinct filler phrase.
pub const FILLER_PENALTY: u32 = 1;
/// Clarity points per distinct refusal/uncertainty phrase.
pub const REFUSAL_PENALTY: u32 = 5;
/// A word must exceed this many characters to count for repetition.
pub const REPEAT_MIN_CHARS: usize = 4;
/// A word must recur more than this many times to be penalized.
pub const REPEAT_THRESHOLD: u32 = 3;
/// The clarity penalty never exceeds this.
pub const CLARITY_PENALTY_CAP: u32 = 30;

/// How many distinct question keywords the answer mentions, 0-100.
///
/// Extracts the question's distinct content keywords and counts how many
/// appear as substrings anywhere in the normalized answer. The score is the
/// matched ratio scaled to 100, with [`HIGH_OVERLAP_BONUS`] on top when the
/// ratio clears [`HIGH_OVERLAP_THRESHOLD`], capped at 100.
///
/// A question with no content keywords ("How do I do it?") has nothing to
/// overlap with, so the score falls back to [`NEUTRAL_OVERLAP_SCORE`].
pub fn keyword_overlap(question: &str, answer: &str) -> u8 {
    let keywords = distinct_keywords(question);
    if keywords.is_empty() {
        return NEUTRAL_OVERLAP_SCORE;
    }

    let haystack = normalize(answer);
    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count();

    let ratio = matched as f64 / keywords.len() as f64;
    let bonus = if ratio > HIGH_OVERLAP_THRESHOLD {
        HIGH_OVERLAP_BONUS
    } else {
        0.0
    };

    ((ratio * 100.0 + bonus).round() as i64).min(100) as u8
}

/// Length-based completeness, 0-100.
///
/// Piecewise over the raw character count `L`:
///
/// | Band              | Score                              |
/// |-------------------|------------------------------------|
/// | 150 ≤ L ≤ 350     | 100 (ideal)                        |
/// | 100 ≤ L < 150     | 70 + round((L−100)/50 × 30)        |
/// | 350 < L ≤ 500     | 100 − round((L−350)/150 × 20)      |
/// | L < 100           | max(30, round(L/100 × 70))         |
/// | L > 500           | max(40, 100 − round((L−500)/200 × 60)) |
///
/// The asymmetry is deliberate: terse answers fall off steeply (an answer
/// with no room for reasoning is probably not one), verbose answers decay
/// gently toward the floor.
pub fn completeness(answer: &str) -> u8 {
    let len = answer.chars().count();
    let l = len as f64;

    let score = if (IDEAL_MIN_CHARS..=IDEAL_MAX_CHARS).contains(&len) {
        100.0
    } else if (SHORT_CHARS..IDEAL_MIN_CHARS).contains(&len) {
        70.0 + ((l - 100.0) / 50.0 * 30.0).round()
    } else if len > IDEAL_MAX_CHARS && len <= LONG_CHARS {
        100.0 - ((l - 350.0) / 150.0 * 20.0).round()
    } else if len < SHORT_CHARS {
        SHORT_FLOOR.max((l / 100.0 * 70.0).round())
    } else {
        LONG_FLOOR.max(100.0 - ((l - 500.0) / 200.0 * 60.0).round())
    };

    score as u8
}

/// Formatting and organization signals, 0-100.
///
/// Starts at [`STRUCTURAL_BASE`] and adds independent bonuses, capped at 100:
/// a list line, numbered step markers (a distinct check - both may fire for
/// the same text), 1-3 paragraph breaks, a sentence count in the readable
/// 3-8 range, and a direct-answer lead-in.
pub fn structural_quality(answer: &str) -> u8 {
    let mut score = u32::from(STRUCTURAL_BASE);

    if has_list_line(answer) {
        score += u32::from(LIST_BONUS);
    }
    if has_numbered_steps(answer) {
        score += u32::from(NUMBERED_STEPS_BONUS);
    }
    let paragraph_breaks = paragraph_break_count(answer);
    if (1..=3).contains(&paragraph_breaks) {
        score += u32::from(PARAGRAPH_BONUS);
    }
    let sentences = sentence_run_count(answer);
    if (3..=8).contains(&sentences) {
        score += u32::from(SENTENCE_BONUS);
    }
    if has_direct_lead_in(answer) {
        score += u32::from(LEAD_IN_BONUS);
    }

    score.min(100) as u8
}

/// Hedging/filler/refusal deduction, 0-30.
///
/// Accumulates [`VAGUE_PHRASE_PENALTY`] per distinct vague phrase,
/// [`REPEATED_WORD_PENALTY`] per over-repeated word,
/// [`FILLER_PENALTY`] per distinct filler phrase, and
/// [`REFUSAL_PENALTY`] per distinct refusal phrase, then caps the sum at
/// [`CLARITY_PENALTY_CAP`].
pub fn clarity_penalty(answer: &str) -> u8 {
    let haystack = normalize(answer);

    let vague = count_phrases(&haystack, VAGUE_PHRASES);
    let repeated = repeated_word_count(&haystack);
    let filler = count_phrases(&haystack, FILLER_PHRASES);
    let refusals = count_phrases(&haystack, REFUSAL_PHRASES_CORE);

    let penalty = vague * VAGUE_PHRASE_PENALTY
        + repeated * REPEATED_WORD_PENALTY
        + filler * FILLER_PENALTY
        + refusals * REFUSAL_PENALTY;

    penalty.min(CLARITY_PENALTY_CAP) as u8
}

/// Score one answer against one question.
///
/// The aggregate is
/// `round(overlap×0.4 + completeness×0.3 + structure×0.2) − clarity`,
/// clamped to `[0, 100]`. Pure and total: any two strings, including empty
/// ones, produce a defined result.
pub fn score_confidence(question: &str, answer: &str) -> ConfidenceFactors {
    let keyword_overlap = keyword_overlap(question, answer);
    let completeness = completeness(answer);
    let structural_quality = structural_quality(answer);
    let clarity_penalty = clarity_penalty(answer);

    let weighted = f64::from(keyword_overlap) * KEYWORD_OVERLAP_WEIGHT
        + f64::from(completeness) * COMPLETENESS_WEIGHT
        + f64::from(structural_quality) * STRUCTURAL_QUALITY_WEIGHT;

    let score = (weighted.round() as i32 - i32::from(clarity_penalty)).clamp(0, 100) as u8;

    ConfidenceFactors {
        keyword_overlap,
        completeness,
        structural_quality,
        clarity_penalty,
        score,
    }
}

// =============================================================================
// STRUCTURAL SCANS
// =============================================================================
// Hand-rolled line/character scans rather than regexes; each has unit tests
// pinning the exact semantics (marker + one whitespace character, etc.).

/// Does any line start with a bullet (`-`, `•`, `*`) or a `1.`/`1)` marker,
/// followed by whitespace? Leading indentation is allowed.
fn has_list_line(text: &str) -> bool {
    text.lines().any(|line| {
        let trimmed = line.trim_start();
        let mut chars = trimmed.chars();
        match chars.next() {
            Some('-') | Some('•') | Some('*') => chars.next().is_some_and(char::is_whitespace),
            Some(c) if c.is_ascii_digit() => {
                let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
                let mut rest_chars = rest.chars();
                matches!(rest_chars.next(), Some('.') | Some(')'))
                    && rest_chars.next().is_some_and(char::is_whitespace)
            }
            _ => false,
        }
    })
}

/// Does `<digits>.` or `<digits>)` followed by whitespace appear anywhere?
///
/// Unlike [`has_list_line`] this does not care about line starts, so inline
/// enumerations ("first 1. do this, 2. do that") count too.
fn has_numbered_steps(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            if j + 1 < chars.len()
                && matches!(chars[j], '.' | ')')
                && chars[j + 1].is_whitespace()
            {
                return true;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    false
}

/// Count of non-overlapping blank-line paragraph breaks (`\n\n`).
fn paragraph_break_count(text: &str) -> usize {
    text.match_indices("\n\n").count()
}

/// Count of terminal punctuation runs (`.`, `!`, `?`), each run one sentence.
fn sentence_run_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                count += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    count
}

/// Does the trimmed answer open with a direct-answer lead-in?
///
/// Plain case-insensitive prefix match: "Item pricing..." counts via "it".
fn has_direct_lead_in(text: &str) -> bool {
    let opening = text.trim().to_lowercase();
    DIRECT_LEAD_INS
        .iter()
        .any(|lead| opening.starts_with(lead))
}

/// How many words longer than [`REPEAT_MIN_CHARS`] characters occur more than
/// [`REPEAT_THRESHOLD`] times. Crude, but catches answers that pad by
/// circling the same term.
fn repeated_word_count(haystack: &str) -> u32 {
    let mut frequency: HashMap<&str, u32> = HashMap::new();
    for word in haystack.split_whitespace() {
        if word.chars().count() > REPEAT_MIN_CHARS {
            *frequency.entry(word).or_insert(0) += 1;
        }
    }
    frequency.values().filter(|&&count| count > REPEAT_THRESHOLD).count() as u32
}
