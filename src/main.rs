use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::process;

use arbiter::{
    mock_candidates, rank_answers, score_confidence, verify_ranking, ConfidenceFactors,
    RankingResult,
};

mod cli;

use cli::display::{self, rank_badge, score_bar, score_colored, section_bot, section_top};
use cli::{Cli, Commands};

/// JSON payload accepted by `rank --json`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    question: String,
    candidates: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Rank {
            question,
            candidates,
            json,
            source,
            output,
            verify,
        } => run_rank(question, candidates, json, source, &output, verify),
        Commands::Score {
            question,
            answer,
            output,
        } => run_score(&question, &answer, &output),
        Commands::Demo { question } => run_demo(&question),
    };

    if let Err(message) = outcome {
        eprintln!("❌ {}", message);
        process::exit(1);
    }
}

fn run_rank(
    question: Option<String>,
    candidates: Vec<String>,
    json: Option<String>,
    source: Option<String>,
    output: &str,
    verify: bool,
) -> Result<(), String> {
    let payload = match json {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path, e))?;
            serde_json::from_str::<Payload>(&content)
                .map_err(|e| format!("Invalid payload JSON: {}", e))?
        }
        None => Payload {
            question: question.ok_or("A question is required (or pass --json <file>)")?,
            candidates,
        },
    };

    if payload.candidates.is_empty() {
        return Err("At least one candidate answer is required".to_string());
    }

    let mut results = rank_answers(&payload.question, &payload.candidates);
    if let Some(label) = source {
        for result in &mut results {
            result.answer.source = Some(label.clone());
        }
    }

    if verify {
        verify_ranking(&results).map_err(|e| format!("Ranking invariant violated: {}", e))?;
    }

    emit(&payload.question, &results, output)
}

fn run_score(question: &str, answer: &str, output: &str) -> Result<(), String> {
    let factors = score_confidence(question, answer);
    match output {
        "json" => {
            let rendered = serde_json::to_string_pretty(&factors)
                .map_err(|e| format!("Serialization failed: {}", e))?;
            println!("{}", rendered);
        }
        "text" => print_factors(&factors),
        other => return Err(format!("Unknown output format: {}", other)),
    }
    Ok(())
}

fn run_demo(question: &str) -> Result<(), String> {
    let candidates = mock_candidates(question).to_vec();
    let mut results = rank_answers(question, &candidates);
    for result in &mut results {
        result.answer.source = Some("mock".to_string());
    }
    emit(question, &results, "text")
}

fn emit(question: &str, results: &[RankingResult], output: &str) -> Result<(), String> {
    match output {
        "json" => {
            let rendered = serde_json::to_string_pretty(results)
                .map_err(|e| format!("Serialization failed: {}", e))?;
            println!("{}", rendered);
            Ok(())
        }
        "text" => {
            print_ranking(question, results);
            Ok(())
        }
        other => Err(format!("Unknown output format: {}", other)),
    }
}

fn print_ranking(question: &str, results: &[RankingResult]) {
    section_top("QUESTION");
    for line in display::wrap(question, display::BOX_WIDTH - 2) {
        display::row(&format!(" {}", line));
    }
    section_bot();

    for result in results {
        println!();
        let label = format!(
            "{} · {} · final {}",
            rank_badge(result.answer.rank),
            result.answer.id,
            result.final_score,
        );
        section_top(&label);

        for line in display::wrap(&result.answer.content, display::BOX_WIDTH - 2) {
            display::row(&format!(" {}", line));
        }

        display::section_mid();
        factor_row("confidence", result.answer.confidence);
        factor_row("relevance", result.relevance);
        factor_row("keyword overlap", result.factors.keyword_overlap);
        factor_row("completeness", result.factors.completeness);
        factor_row("structure", result.factors.structural_quality);
        penalty_row("clarity penalty", result.factors.clarity_penalty);
        penalty_row("hallucination", result.hallucination_penalty);
        section_bot();
    }
}

fn print_factors(factors: &ConfidenceFactors) {
    section_top("CONFIDENCE");
    factor_row("keyword overlap", factors.keyword_overlap);
    factor_row("completeness", factors.completeness);
    factor_row("structure", factors.structural_quality);
    penalty_row("clarity penalty", factors.clarity_penalty);
    display::section_mid();
    factor_row("score", factors.score);
    section_bot();
}

fn factor_row(label: &str, value: u8) {
    display::row(&format!(
        " {:<16} {} {}",
        label,
        score_colored(value),
        score_bar(value, 40)
    ));
}

fn penalty_row(label: &str, value: u8) {
    let text = format!("-{}", value);
    let rendered = if value == 0 {
        display::styled(&[display::DIM], &text)
    } else {
        display::themed(display::RED, &[display::BOLD], &text)
    };
    display::row(&format!(" {:<16} {}", label, rendered));
}
