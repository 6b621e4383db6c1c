// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the answer ranking engine.
//!
//! The browser front end consumes the exact same engine the native library
//! exposes - one implementation, one set of numbers. Both exports marshal
//! their results through `serde-wasm-bindgen`, so the JavaScript side sees
//! the same camelCase records the JSON output produces.
//!
//! Single-threaded by design: a ranking call is O(text length) over three
//! candidates, far below the threshold where worker offloading would pay.

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::scoring::ranking::rank_answers;
use crate::scoring::score_confidence;

/// Score one answer against a question.
///
/// Returns a `ConfidenceFactors` object (camelCase fields).
#[wasm_bindgen(js_name = scoreConfidence)]
pub fn score_confidence_wasm(question: &str, answer: &str) -> Result<JsValue, JsValue> {
    let factors = score_confidence(question, answer);
    to_value(&factors).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank candidate answers for a question.
///
/// `candidates` is a JS array of strings; the result is an array of
/// `RankingResult` objects in rank order.
#[wasm_bindgen(js_name = rankAnswers)]
pub fn rank_answers_wasm(question: &str, candidates: Vec<String>) -> Result<JsValue, JsValue> {
    let results = rank_answers(question, &candidates);
    to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
}
