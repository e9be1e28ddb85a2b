//! Line-by-line conversion of whole inputs

use crate::converter::NumberConverter;
use crate::error::ConverterError;
use crate::types::{BatchReport, LineResult};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Applies `extract_and_convert` to every non-empty line of an input
///
/// Failed conversions are ordinary rows in the report; only I/O problems
/// stop a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    converter: NumberConverter,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    pub fn new(converter: NumberConverter) -> Self {
        Self { converter }
    }

    /// Convert one raw line, or `None` if it is blank
    pub fn process_line(&self, line_number: usize, raw: &str) -> Option<LineResult> {
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        let outcome = self.converter.extract_and_convert(line);
        Some(LineResult::from_outcome(line_number, line, outcome))
    }

    /// Convert every line of an in-memory text
    pub fn process_text(&self, text: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for (idx, raw) in text.lines().enumerate() {
            if let Some(result) = self.process_line(idx + 1, raw) {
                report.push(result);
            }
        }
        self.log_summary(&report);
        report
    }

    /// Convert every line read from `reader`
    ///
    /// # Errors
    /// Returns [`ConverterError::Io`] if reading fails or a line is not UTF-8.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<BatchReport, ConverterError> {
        let mut report = BatchReport::default();
        for (idx, raw) in reader.lines().enumerate() {
            let raw = raw?;
            if let Some(result) = self.process_line(idx + 1, &raw) {
                debug!("Line {}: {}", result.line, result.status.as_str());
                report.push(result);
            }
        }
        self.log_summary(&report);
        Ok(report)
    }

    fn log_summary(&self, report: &BatchReport) {
        let summary = &report.summary;
        info!(
            "Processed {} line(s): {} converted, {} invalid, {} too large",
            summary.total, summary.converted, summary.invalid, summary.too_large
        );
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Input")]
    input: &'a str,
    #[serde(rename = "Output")]
    output: &'a str,
}

/// Write `Input,Output` rows (with header) for a batch
///
/// # Errors
/// Returns [`ConverterError::Csv`] or [`ConverterError::Io`] on write failure.
pub fn write_csv<W: Write>(results: &[LineResult], writer: W) -> Result<(), ConverterError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(CsvRow {
            input: &result.input,
            output: &result.output,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
