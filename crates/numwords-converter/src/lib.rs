//! Numwords Converter
//!
//! Converts integers, and the first integer found in a sentence, into
//! British-style English words.
//!
//! # Overview
//!
//! A number is split into base-1000 chunks. Each non-zero chunk becomes a
//! phrase ("one hundred and seven thousand"), the phrases are ordered from
//! the largest magnitude down and joined with commas, and the last boundary
//! becomes "and" when the units chunk has no hundreds.
//!
//! # Architecture
//!
//! ```text
//! Text → token search → Numeral → chunks → phrases → words
//! ```
//!
//! # Key Features
//!
//! - **Two-outcome results**: a phrase, `number invalid` or `number too large`
//! - **Any input length**: digits are never parsed into a machine integer
//! - **Strict token search**: `#12`, `$5`, `1,000` and `2.5` are not integers
//! - **Batch processing**: per-line conversion with summary and CSV export
//!
//! # Example Usage
//!
//! ```
//! use numwords_converter::{BatchProcessor, ConverterConfig, NumberConverter};
//!
//! let converter = NumberConverter::new(ConverterConfig::default());
//!
//! assert_eq!(
//!     converter.extract_and_convert_text("Interactive and printable 10022 ZIP code."),
//!     "ten thousand and twenty-two"
//! );
//! assert_eq!(converter.convert_integer_text("12 34"), "number invalid");
//!
//! let report = BatchProcessor::new(converter).process_text("a 1\nb #2\n");
//! assert_eq!(report.summary.converted, 1);
//! assert_eq!(report.summary.invalid, 1);
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod converter;
mod error;
mod phrase;
mod token;
mod types;


pub use batch::{write_csv, BatchProcessor};
pub use config::{ConverterConfig, Scale, TokenMode};
pub use converter::NumberConverter;
pub use error::ConverterError;
pub use phrase::convert_three_digit_chunk;
pub use token::{find_integer_token, IntegerToken};
pub use types::{BatchReport, BatchSummary, LineResult, LineStatus};
