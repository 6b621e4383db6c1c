//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so the same calibrated answers are used
//! everywhere instead of being re-typed with subtle drift.

#![doc(hidden)]

/// The canonical question used by calibration scenarios.
pub const IDEAL_QUESTION: &str = "How do I reset my password?";

/// A strong answer to [`IDEAL_QUESTION`]: ideal length band, numbered
/// three-step list, mentions every question keyword, no hedging.
pub fn strong_answer() -> String {
    "To reset your password:\n\
     1. Open the account settings page.\n\
     2. Select the security tab and choose the password reset option.\n\
     3. Follow the emailed reset steps to finish.\n\n\
     The whole thing takes under two minutes."
        .to_string()
}

/// A refusal answer: trips both the clarity and hallucination refusal lists.
pub fn refusal_answer() -> String {
    "I don't know and I cannot help with that.".to_string()
}

/// A hedged answer: substantive length, saturated with vague qualifiers.
pub fn hedged_answer() -> String {
    "I think it could be the settings page, but maybe the security tab is \
     what you want. Perhaps the emailed reset works, or possibly the support \
     form - it is sort of hard to say."
        .to_string()
}

/// A terse answer: well under the short-length floor.
pub fn terse_answer() -> String {
    "Use the settings page.".to_string()
}

/// Build an owned candidate list from anything string-like.
pub fn candidates<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|text| text.as_ref().to_string()).collect()
}
