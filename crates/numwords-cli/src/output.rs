//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use numwords_converter::{BatchReport, BatchSummary, LineResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single conversion.
    pub fn format_result(&self, result: &LineResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => {
                let color = if result.is_converted() { "green" } else { "red" };
                Ok(self.colorize(&result.output, color))
            }
            OutputFormat::Quiet => Ok(result.output.clone()),
        }
    }

    /// Format a batch report.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report
                .results
                .iter()
                .map(|r| r.output.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a batch report as a table followed by its summary.
    fn format_report_table(&self, report: &BatchReport) -> String {
        if report.is_empty() {
            return self.warning("No non-empty lines found.");
        }

        let mut builder = Builder::default();
        builder.push_record(["Line", "Input", "Output"]);

        for result in &report.results {
            builder.push_record([
                result.line.to_string(),
                result.input.clone(),
                result.output.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.summary(&report.summary))
    }

    /// Format batch counts.
    pub fn summary(&self, summary: &BatchSummary) -> String {
        if summary.failed() == 0 {
            self.success(&format!("Converted {} line(s)", summary.converted))
        } else {
            self.warning(&format!(
                "Converted {} of {} line(s) ({} invalid, {} too large)",
                summary.converted, summary.total, summary.invalid, summary.too_large
            ))
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
