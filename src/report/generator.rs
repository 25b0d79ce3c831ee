//! Report rendering.
//!
//! This module renders an evaluation [`Report`] as plain text for the
//! terminal, as Markdown, or as pretty-printed JSON.

use crate::models::{prime_indicator, Report};
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;
use std::path::Path;

/// Render the report as plain text.
pub fn render_text(report: &Report) -> String {
    let mut output = String::new();

    for (operation, result) in report.operations.iter() {
        output.push_str(&format!("{:<16}{}\n", format!("{}:", operation), result.equation()));
    }

    output.push('\n');
    for (n, is_prime) in report.prime_checks() {
        let answer = if is_prime { "Yes" } else { "No" };
        output.push_str(&format!("Is {} prime? {}\n", n, answer));
    }

    output.push('\n');
    output.push_str(&report.summary_text);
    output.push('\n');

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# Math Agent Report\n\n");
    output.push_str(&generate_results_section(report));
    output.push_str(&generate_prime_section(report));
    output.push_str(&generate_summary_section(&report.summary_text));
    output.push_str(&generate_footer());

    output
}

/// Generate the per-operation results section.
fn generate_results_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## Results\n\n");

    for (operation, result) in report.operations.iter() {
        section.push_str(&format!("### {} {}\n\n", operation.emoji(), operation));
        section.push_str("```\n");
        section.push_str(&result.equation());
        section.push_str("\n```\n\n");
    }

    section
}

/// Generate the prime check section.
fn generate_prime_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## 🔍 Prime Check\n\n");
    for (n, is_prime) in report.prime_checks() {
        section.push_str(&format!(
            "- Is **{}** prime? {}\n",
            n,
            prime_indicator(is_prime)
        ));
    }
    section.push('\n');

    section
}

/// Generate the summary section.
fn generate_summary_section(summary: &str) -> String {
    let mut section = String::new();

    section.push_str("## 🗒 Summary\n\n");
    section.push_str(&format!("> {}\n\n", summary));

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str(&format!(
        "*Report generated by MathAgent on {}*\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
