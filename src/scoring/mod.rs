// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate answers get their numbers.
//!
//! The confidence side judges each answer on its own terms; the ranking side
//! compares answers against each other and guarantees the published ordering
//! is visibly differentiated. Both are deterministic functions of surface
//! text - no models, no randomness, no clock.

mod confidence;
pub mod ranking;
mod relevance;

pub use confidence::*;
pub use relevance::*;
