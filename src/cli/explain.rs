//! Explain command handler.
//!
//! Turns a set of component scores into a verdict and reasons without
//! running a match, which helps reviewers interpret stored results.

use crate::matching::{explain, ComponentScores};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// Scores to explain, all on the 0-100 scale.
#[derive(Debug, Clone, Copy)]
pub struct ExplainArgs {
    /// Overall confidence; computed from the components when absent
    pub confidence: Option<f64>,
    pub category: f64,
    pub location: f64,
    pub description: f64,
}

#[derive(Serialize)]
struct ExplainOutput {
    confidence: f64,
    #[serde(flatten)]
    explanation: crate::matching::MatchExplanation,
}

/// Run the explain command
pub fn run_explain(args: ExplainArgs, format: ReportFormat, target: &OutputTarget) -> Result<i32> {
    let scores = [
        ("category", Some(args.category)),
        ("location", Some(args.location)),
        ("description", Some(args.description)),
        ("confidence", args.confidence),
    ];
    for (name, value) in scores {
        // NaN fails the range check too
        if let Some(value) = value.filter(|v| !(0.0..=100.0).contains(v)) {
            anyhow::bail!("{name} score must be between 0 and 100, got {value}");
        }
    }

    let confidence = args.confidence.unwrap_or_else(|| {
        ComponentScores::new(args.description / 100.0, args.category / 100.0, args.location / 100.0)
            .confidence()
    });
    let explanation = explain(confidence, args.category, args.location, args.description);

    let rendered = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&ExplainOutput {
            confidence,
            explanation,
        })
        .context("failed to serialize explanation")?,
        _ => format!("{confidence:.1}% {}", explanation.detailed()),
    };
    write_output(&rendered, target, true)?;

    Ok(exit_codes::SUCCESS)
}
