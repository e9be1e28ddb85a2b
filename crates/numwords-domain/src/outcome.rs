//! Outcome module - the result of a single conversion

use std::fmt;

/// Text returned when no well-formed integer could be found
pub const INVALID_MESSAGE: &str = "number invalid";

/// Text returned when a number has more chunks than the magnitude table
pub const TOO_LARGE_MESSAGE: &str = "number too large";

/// Classified failure of a conversion
///
/// Both variants are ordinary values: batch callers tabulate them next to
/// successful phrases instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// No parseable integer in the input
    Invalid,

    /// Magnitude exceeds the supported range
    TooLarge,
}

impl ConversionError {
    /// The literal output text for this failure
    pub fn message(&self) -> &'static str {
        match self {
            ConversionError::Invalid => INVALID_MESSAGE,
            ConversionError::TooLarge => TOO_LARGE_MESSAGE,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ConversionError {}

/// Either a word phrase or a classified failure
pub type Outcome = Result<String, ConversionError>;

/// Collapse an outcome into its display text
///
/// # Examples
///
/// ```
/// use numwords_domain::{render, ConversionError};
///
/// assert_eq!(render(Ok("forty-two".to_string())), "forty-two");
/// assert_eq!(render(Err(ConversionError::Invalid)), "number invalid");
/// assert_eq!(render(Err(ConversionError::TooLarge)), "number too large");
/// ```
pub fn render(outcome: Outcome) -> String {
    outcome.unwrap_or_else(|e| e.message().to_string())
}
