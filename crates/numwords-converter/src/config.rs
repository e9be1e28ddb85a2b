//! Configuration for the Converter

use crate::error::ConverterError;
use numwords_domain::Lexicon;
use serde::{Deserialize, Serialize};

/// Magnitude table used for conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Up to "quintillion" (numbers below 10^21)
    #[default]
    Standard,
    /// Up to "decillion" (numbers below 10^36)
    Extended,
}

impl Scale {
    /// The lexicon for this scale
    pub fn lexicon(&self) -> Lexicon {
        match self {
            Scale::Standard => Lexicon::STANDARD,
            Scale::Extended => Lexicon::EXTENDED,
        }
    }
}

/// How strictly the first numeric token in free text is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
    /// Reject tokens with marker prefixes (`#12`, `$5`) or separators (`1,000`, `2.5`)
    #[default]
    Strict,
    /// Convert the first signed digit run as found
    Lenient,
}

/// Configuration for the Converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Magnitude table
    #[serde(default)]
    pub scale: Scale,

    /// Word placed before negative numbers
    #[serde(default = "default_negative_word")]
    pub negative_word: String,

    /// Token checking for free-text extraction
    #[serde(default)]
    pub token_mode: TokenMode,
}

fn default_negative_word() -> String {
    "negative".to_string()
}

impl ConverterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let word = self.negative_word.as_str();
        if word.trim().is_empty() {
            return Err("negative_word must not be empty".to_string());
        }
        if word.trim() != word {
            return Err("negative_word must not have surrounding whitespace".to_string());
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            return Err("negative_word must not contain digits".to_string());
        }
        Ok(())
    }

    /// Strict preset: the default token checks and standard scale
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient preset: plain first-match extraction, extended scale
    pub fn lenient() -> Self {
        Self {
            scale: Scale::Extended,
            negative_word: default_negative_word(),
            token_mode: TokenMode::Lenient,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConverterError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ConverterError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConverterError> {
        toml::to_string_pretty(self).map_err(|e| ConverterError::Toml(e.to_string()))
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            scale: Scale::Standard,
            negative_word: default_negative_word(),
            token_mode: TokenMode::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scale, Scale::Standard);
        assert_eq!(config.token_mode, TokenMode::Strict);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ConverterConfig::strict().validate().is_ok());
        assert!(ConverterConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_negative_word() {
        let mut config = ConverterConfig::default();
        config.negative_word = "  ".to_string();
        assert!(config.validate().is_err());

        config.negative_word = " minus".to_string();
        assert!(config.validate().is_err());

        config.negative_word = "minus1".to_string();
        assert!(config.validate().is_err());

        config.negative_word = "minus".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConverterConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = ConverterConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_defaults_for_missing_fields() {
        let parsed = ConverterConfig::from_toml("scale = \"extended\"").unwrap();
        assert_eq!(parsed.scale, Scale::Extended);
        assert_eq!(parsed.negative_word, "negative");
        assert_eq!(parsed.token_mode, TokenMode::Strict);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(ConverterConfig::from_toml("scale = \"galactic\"").is_err());
        assert!(ConverterConfig::from_toml("negative_word = \"\"").is_err());
    }

    #[test]
    fn test_scale_lexicons() {
        assert_eq!(Scale::Standard.lexicon().magnitude_count(), 7);
        assert_eq!(Scale::Extended.lexicon().magnitude_count(), 12);
    }
}
