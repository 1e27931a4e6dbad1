//! Rendering of diagnostic outcomes

use console::style;
use serde::Serialize;
use std::path::Path;

use crate::engine::Outcome;

/// Plain message lines for an outcome
pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::MissingFields { fields } => fields
            .iter()
            .map(|field| format!("Vehicle {} field is missing or empty", field))
            .collect(),
        Outcome::MissingParts { .. } => outcome
            .missing_part_list()
            .iter()
            .map(ToString::to_string)
            .collect(),
        Outcome::DamagedParts { parts } => parts.iter().map(ToString::to_string).collect(),
        Outcome::Success { year, make, model } => vec![format!(
            "All parts are in working condition for: {} {} {}",
            year, make, model
        )],
    }
}

/// Print an outcome for one record in human-readable form
pub fn print_outcome(path: &Path, outcome: &Outcome) {
    if outcome.is_success() {
        println!("{} {}", style("✓").green(), path.display());
        for line in outcome_lines(outcome) {
            println!("    {}", style(line).green());
        }
    } else {
        println!(
            "{} {} - {} finding(s)",
            style("✗").red(),
            path.display(),
            outcome.finding_count()
        );
        for line in outcome_lines(outcome) {
            println!("    {}", style(line).red());
        }
    }
}

/// Machine-readable entry for one checked record
#[derive(Debug, Serialize)]
pub struct RecordReport {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordReport {
    pub fn diagnosed(path: &Path, outcome: Outcome) -> Self {
        Self {
            path: path.display().to_string(),
            outcome: Some(outcome),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.display().to_string(),
            outcome: None,
            error: Some(error.to_string()),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome.as_ref().is_some_and(Outcome::is_success)
    }
}
