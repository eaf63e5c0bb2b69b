//! Output formatting and writing utilities
//!
//! This module formats validation reports and constraint tables as JSON,
//! YAML or human-readable text, and owns progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::trace;
use vcloud_checks::{NodeKind, Violation, ViolationKind};

/// Validation outcome of one input file
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub file: PathBuf,
    pub kind: NodeKind,
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// Document echoed back with `--detailed`, credentials redacted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<serde_json::Value>,
}

impl DocumentReport {
    pub fn new(file: PathBuf, kind: NodeKind, violations: Vec<Violation>) -> Self {
        Self {
            file,
            kind,
            valid: violations.is_empty(),
            violations,
            document: None,
        }
    }
}

/// Outcome of a validate run over several files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    pub documents: Vec<DocumentReport>,
}

impl ValidationSummary {
    pub fn total(&self) -> usize {
        self.documents.len()
    }

    pub fn invalid(&self) -> usize {
        self.documents.iter().filter(|d| !d.valid).count()
    }

    pub fn violations(&self) -> usize {
        self.documents.iter().map(|d| d.violations.len()).sum()
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the summary of a validate run
    fn format_summary(&self, summary: &ValidationSummary) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty | OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    fn format_summary(&self, summary: &ValidationSummary) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_summary_human(summary)),
            _ => self.format(summary),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, show_progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: show_progress && !quiet && io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(format: OutputFormat, use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            show_progress: false,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing data");
        self.writeln(formatted.trim_end())
    }

    /// Write the violations of one document
    ///
    /// Machine formats are written once for the whole run by [`Self::summary`].
    pub fn report(&mut self, report: &DocumentReport) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }
        if report.valid && self.quiet {
            return Ok(());
        }
        let formatted = format_report_human(report, self.use_color);
        self.writeln(formatted.trim_end())?;
        if let Some(document) = &report.document {
            self.section("Document")?;
            self.data(document)?;
        }
        Ok(())
    }

    /// Write the summary of a validate run
    pub fn summary(&mut self, summary: &ValidationSummary) -> Result<()> {
        if self.is_human() && self.quiet {
            return Ok(());
        }
        let formatted = self.format.format_summary(summary)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a progress bar for multi-file runs
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress || length < 2 {
            return None;
        }

        let pb = ProgressBar::new(length);
        if let Some(style) = default_progress_style() {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Progress bar style for multi-file runs
pub fn default_progress_style() -> Option<ProgressStyle> {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .ok()
        .map(|style| style.progress_chars("#>-"))
}

/// Format a document report for human reading
fn format_report_human(report: &DocumentReport, use_color: bool) -> String {
    let mut output = String::new();

    if report.valid {
        let line = format!("✓ {} ({}) is valid", report.file.display(), report.kind);
        output.push_str(&paint(&line, use_color, |s| s.green()));
        output.push('\n');
        return output;
    }

    let header = format!(
        "✗ {} ({}): {} violation(s)",
        report.file.display(),
        report.kind,
        report.violations.len()
    );
    output.push_str(&paint(&header, use_color, |s| s.red()));
    output.push('\n');

    for (i, violation) in report.violations.iter().enumerate() {
        output.push_str(&format_violation_human(i + 1, violation));
    }

    output
}

/// Format a single violation for human reading
fn format_violation_human(index: usize, violation: &Violation) -> String {
    let mut output = String::new();

    output.push_str(&format!("  {}. {} at {}\n", index, violation.kind, violation.path));
    output.push_str(&format!("     Node: {}.{}\n", violation.node, violation.field));
    output.push_str(&format!("     Expected: {}\n", violation.expected));
    output.push_str(&format!("     Actual: {}\n", violation.actual));

    if let ViolationKind::InvalidEnumerationValue { enumeration, admissible } = &violation.kind {
        output.push_str(&format!("     Admissible {}: {}\n", enumeration, admissible.join(", ")));
    }

    output
}

/// Format the run summary for human reading
fn format_summary_human(summary: &ValidationSummary) -> String {
    if summary.invalid() == 0 {
        format!("All {} document(s) valid\n", summary.total())
    } else {
        format!(
            "{} of {} document(s) invalid, {} violation(s) in total\n",
            summary.invalid(),
            summary.total(),
            summary.violations()
        )
    }
}

fn paint(text: &str, use_color: bool, color: fn(&str) -> colored::ColoredString) -> String {
    if use_color {
        color(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
