use anyhow::Result;
use serde::Serialize;

use crate::domain::{ImprovementOutcome, MatchReport};

pub fn render_outcome(outcome: &ImprovementOutcome) -> String {
    format!(
        "Score after tuning: {}%\n\nFine tuned resume:\n{}\n\nSuggestions:\n{}",
        outcome.score, outcome.resume, outcome.suggestions
    )
}

pub fn render_match(report: &MatchReport) -> String {
    format!(
        "Match Score: {}%\nSuggestions:\n{}",
        report.score, report.suggestions
    )
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
