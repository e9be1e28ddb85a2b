//! Error types for the Converter
//!
//! Conversion outcomes (`number invalid`, `number too large`) are values, not
//! errors; these variants cover configuration and batch I/O only.

use thiserror::Error;

/// Operational errors around the conversion engine
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing or serialization error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Failure reading batch input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing CSV output
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<toml::de::Error> for ConverterError {
    fn from(e: toml::de::Error) -> Self {
        ConverterError::Toml(e.to_string())
    }
}

impl From<csv::Error> for ConverterError {
    fn from(e: csv::Error) -> Self {
        ConverterError::Csv(e.to_string())
    }
}
