//! Result types for batch conversion

use numwords_domain::{ConversionError, Outcome};
use serde::{Deserialize, Serialize};

/// Classification of one converted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    /// A word phrase was produced
    Converted,
    /// No well-formed integer in the line
    Invalid,
    /// The integer exceeds the magnitude table
    TooLarge,
}

impl LineStatus {
    /// Classify an outcome
    pub fn of(outcome: &Outcome) -> Self {
        match outcome {
            Ok(_) => LineStatus::Converted,
            Err(ConversionError::Invalid) => LineStatus::Invalid,
            Err(ConversionError::TooLarge) => LineStatus::TooLarge,
        }
    }

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStatus::Converted => "converted",
            LineStatus::Invalid => "invalid",
            LineStatus::TooLarge => "too_large",
        }
    }
}

/// Input and output of one non-empty line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    /// 1-based line number in the original input
    pub line: usize,

    /// Trimmed input text
    pub input: String,

    /// Word phrase, or the literal failure text
    pub output: String,

    /// Classification of the output
    pub status: LineStatus,
}

impl LineResult {
    /// Build a line result from a conversion outcome
    pub fn from_outcome(line: usize, input: impl Into<String>, outcome: Outcome) -> Self {
        let status = LineStatus::of(&outcome);
        Self {
            line,
            input: input.into(),
            output: numwords_domain::render(outcome),
            status,
        }
    }

    /// Whether the line produced a word phrase
    pub fn is_converted(&self) -> bool {
        self.status == LineStatus::Converted
    }
}

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Non-empty lines processed
    pub total: usize,
    /// Lines converted to words
    pub converted: usize,
    /// Lines classified as invalid
    pub invalid: usize,
    /// Lines classified as too large
    pub too_large: usize,
}

impl BatchSummary {
    /// Record one line's status
    pub fn record(&mut self, status: LineStatus) {
        self.total += 1;
        match status {
            LineStatus::Converted => self.converted += 1,
            LineStatus::Invalid => self.invalid += 1,
            LineStatus::TooLarge => self.too_large += 1,
        }
    }

    /// Lines that did not convert
    pub fn failed(&self) -> usize {
        self.invalid + self.too_large
    }
}

/// All line results of a batch run plus their summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Results in input order
    pub results: Vec<LineResult>,

    /// Counts by status
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Append a result and update the summary
    pub fn push(&mut self, result: LineResult) {
        self.summary.record(result.status);
        self.results.push(result);
    }

    /// Whether no non-empty lines were seen
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
