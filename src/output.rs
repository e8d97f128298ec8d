//! CLI output for a finished run.
//!
//! Stdout carries only the snippets, one per converted input and in input
//! order, so the output can be pasted or piped straight into a post. Failures
//! go to stderr:
//!
//! ```text
//! error: photos/broken.jpg: decode failed: ...
//! converted 2 of 3 images
//! ```
//!
//! Each `format_*` function is pure and returns lines; the `print_*`
//! wrappers do the writing.

use crate::process::{BatchReport, ConversionError};

/// Stderr line for one failed input.
pub fn format_failure(error: &ConversionError) -> String {
    format!("error: {error}")
}

/// Closing stderr line; only produced when something failed.
pub fn format_summary(report: &BatchReport) -> Option<String> {
    if !report.has_failures() {
        return None;
    }
    let total = report.outcomes.len();
    let noun = if total == 1 { "image" } else { "images" };
    Some(format!("converted {} of {total} {noun}", report.succeeded()))
}

/// Stdout lines for a report.
pub fn format_report_stdout(report: &BatchReport) -> Vec<String> {
    report.lines().map(str::to_string).collect()
}

/// Stderr lines for a report.
pub fn format_report_stderr(report: &BatchReport) -> Vec<String> {
    report
        .failures()
        .map(format_failure)
        .chain(format_summary(report))
        .collect()
}

pub fn print_report(report: &BatchReport) {
    for line in format_report_stdout(report) {
        println!("{line}");
    }
    for line in format_report_stderr(report) {
        eprintln!("{line}");
    }
}
