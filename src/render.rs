//! Plain-text rendering of session state for the terminal.

use crate::data_models::{SearchRecord, Verdict};

/// Lines of record content shown in a history listing.
const PREVIEW_LINES: usize = 2;
const PREVIEW_CHARS: usize = 120;

pub fn verdict_block(verdict: Verdict) -> String {
    format!("{}\n{}", verdict.label(), verdict.description())
}

pub fn error_block(message: &str) -> String {
    format!("Error\n{message}")
}

pub fn accuracy_line(accuracy: f64) -> String {
    format!("The model has an accuracy of {:.2}%.", accuracy * 100.0)
}

pub fn history_listing(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return "No recent searches".to_string();
    }
    records
        .iter()
        .map(|record| format!("{}\n  {}", preview(&record.content), record.result.label()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Clamp content to a couple of lines and a bounded width, marking the cut.
fn preview(content: &str) -> String {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let mut clamped = lines
        .iter()
        .take(PREVIEW_LINES)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let mut truncated = lines.len() > PREVIEW_LINES;

    if clamped.chars().count() > PREVIEW_CHARS {
        clamped = clamped.chars().take(PREVIEW_CHARS).collect();
        truncated = true;
    }
    if truncated {
        clamped.push_str("...");
    }
    format!("- {clamped}")
}
