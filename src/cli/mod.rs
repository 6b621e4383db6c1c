// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the arbiter command-line interface.
//!
//! Three subcommands: `rank` to score and order a candidate set, `score` to
//! inspect the factor breakdown for a single answer, and `demo` to run the
//! built-in deterministic candidate source through the engine. `rank` reads
//! candidates from positional arguments or from a JSON payload file.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arbiter",
    about = "Deterministic scoring and ranking for candidate answers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate answers for a question
    Rank {
        /// The question the candidates try to answer
        question: Option<String>,

        /// Candidate answer texts (the conventional count is three)
        candidates: Vec<String>,

        /// Read a {"question": ..., "candidates": [...]} JSON file instead
        /// of positional arguments
        #[arg(long)]
        json: Option<String>,

        /// Source label recorded on every answer (e.g. a provider name)
        #[arg(long)]
        source: Option<String>,

        /// Output format: "text" for the terminal view, "json" for machines
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Re-check the ranking invariants before printing
        #[arg(long)]
        verify: bool,
    },

    /// Show the confidence factor breakdown for one answer
    Score {
        /// The question the answer addresses
        question: String,

        /// The answer text to score
        answer: String,

        /// Output format: "text" or "json"
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Rank the built-in deterministic mock candidates for a question
    Demo {
        /// The question to generate mock candidates for
        question: String,
    },
}
