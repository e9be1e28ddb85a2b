//! Core NumberConverter implementation

use crate::config::ConverterConfig;
use crate::error::ConverterError;
use crate::phrase::SegmentBuilder;
use crate::token::find_integer_token;
use numwords_domain::{render, ConversionError, IntoNumeral, Lexicon, Numeral, Outcome};
use tracing::debug;

/// Converts integers, and integers found in free text, into English words
///
/// The converter holds only its configuration and a `'static` lexicon, so it
/// is cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct NumberConverter {
    lexicon: Lexicon,
    config: ConverterConfig,
}

impl NumberConverter {
    /// Create a new NumberConverter
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            lexicon: config.scale.lexicon(),
            config,
        }
    }

    /// Create a new NumberConverter after validating the configuration
    pub fn try_new(config: ConverterConfig) -> Result<Self, ConverterError> {
        config.validate().map_err(ConverterError::Config)?;
        Ok(Self::new(config))
    }

    /// Get the active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Get the lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Convert an integer or numeric string to words
    ///
    /// # Examples
    ///
    /// ```
    /// use numwords_converter::NumberConverter;
    /// use numwords_domain::ConversionError;
    ///
    /// let converter = NumberConverter::default();
    /// assert_eq!(converter.convert_integer(0).unwrap(), "zero");
    /// assert_eq!(converter.convert_integer(-42).unwrap(), "negative forty-two");
    /// assert_eq!(converter.convert_integer("+1000001").unwrap(), "one million and one");
    /// assert_eq!(converter.convert_integer("23 456"), Err(ConversionError::Invalid));
    /// ```
    pub fn convert_integer<N: IntoNumeral>(&self, value: N) -> Outcome {
        let numeral = value.into_numeral()?;
        self.convert_numeral(&numeral)
    }

    /// Convert an already parsed numeral to words
    pub fn convert_numeral(&self, numeral: &Numeral) -> Outcome {
        if numeral.is_zero() {
            return Ok(self.lexicon.ones(0).to_string());
        }

        let chunk_count = numeral.chunk_count();
        if chunk_count > self.lexicon.magnitude_count() {
            debug!(
                "Number has {} chunks, magnitude table supports {}",
                chunk_count,
                self.lexicon.magnitude_count()
            );
            return Err(ConversionError::TooLarge);
        }

        let mut builder = SegmentBuilder::new();
        for chunk in numeral.chunks() {
            builder
                .push_chunk(&self.lexicon, chunk)
                .ok_or(ConversionError::TooLarge)?;
        }

        let segment_count = builder.len();
        let body = builder.finish();
        let words = if numeral.is_negative() {
            format!("{} {}", self.config.negative_word, body)
        } else {
            body
        };

        debug!("Converted {} into {} segment(s)", numeral, segment_count);
        Ok(words.trim().to_string())
    }

    /// Find the first integer in `text` and convert it to words
    ///
    /// # Examples
    ///
    /// ```
    /// use numwords_converter::NumberConverter;
    ///
    /// let converter = NumberConverter::default();
    /// assert_eq!(
    ///     converter.extract_and_convert("We processed 9121 records.").unwrap(),
    ///     "nine thousand, one hundred and twenty-one"
    /// );
    /// ```
    pub fn extract_and_convert(&self, text: &str) -> Outcome {
        let token = match find_integer_token(text, self.config.token_mode) {
            Ok(token) => token,
            Err(e) => {
                debug!("No usable integer token in {} chars of text", text.len());
                return Err(e);
            }
        };

        debug!("Found integer token '{}' at byte {}", token.text, token.start);
        let numeral = Numeral::parse(token.text)?;
        self.convert_numeral(&numeral)
    }

    /// [`convert_integer`](Self::convert_integer) with failures rendered as text
    pub fn convert_integer_text<N: IntoNumeral>(&self, value: N) -> String {
        render(self.convert_integer(value))
    }

    /// [`extract_and_convert`](Self::extract_and_convert) with failures rendered as text
    pub fn extract_and_convert_text(&self, text: &str) -> String {
        render(self.extract_and_convert(text))
    }
}

impl Default for NumberConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Scale, TokenMode};

    #[test]
    fn test_zero() {
        let converter = NumberConverter::default();
        assert_eq!(converter.convert_integer(0).unwrap(), "zero");
        assert_eq!(converter.convert_integer("-0").unwrap(), "zero");
        assert_eq!(converter.convert_integer("000").unwrap(), "zero");
    }

    #[test]
    fn test_small_numbers() {
        let converter = NumberConverter::default();
        assert_eq!(converter.convert_integer(7).unwrap(), "seven");
        assert_eq!(converter.convert_integer(40).unwrap(), "forty");
        assert_eq!(converter.convert_integer(536).unwrap(), "five hundred and thirty-six");
    }

    #[test]
    fn test_negative_prefix() {
        let converter = NumberConverter::default();
        assert_eq!(
            converter.convert_integer(-9121).unwrap(),
            "negative nine thousand, one hundred and twenty-one"
        );
    }

    #[test]
    fn test_custom_negative_word() {
        let config = ConverterConfig {
            negative_word: "minus".to_string(),
            ..ConverterConfig::default()
        };
        let converter = NumberConverter::new(config);
        assert_eq!(converter.convert_integer(-3).unwrap(), "minus three");
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let config = ConverterConfig {
            negative_word: String::new(),
            ..ConverterConfig::default()
        };
        assert!(NumberConverter::try_new(config).is_err());
    }

    #[test]
    fn test_string_input_is_validated() {
        let converter = NumberConverter::default();
        assert_eq!(converter.convert_integer("12a"), Err(ConversionError::Invalid));
        assert_eq!(converter.convert_integer(""), Err(ConversionError::Invalid));
        assert_eq!(converter.convert_integer("--4"), Err(ConversionError::Invalid));
    }

    #[test]
    fn test_standard_boundary() {
        let converter = NumberConverter::default();
        let largest = "9".repeat(21);
        assert!(converter.convert_integer(largest.as_str()).is_ok());

        let too_large = format!("1{}", "0".repeat(21));
        assert_eq!(
            converter.convert_integer(too_large.as_str()),
            Err(ConversionError::TooLarge)
        );
    }

    #[test]
    fn test_too_large_beyond_u128() {
        let converter = NumberConverter::default();
        let huge = "7".repeat(60);
        assert_eq!(converter.convert_integer(huge), Err(ConversionError::TooLarge));
        assert_eq!(converter.convert_integer(i128::MAX), Err(ConversionError::TooLarge));
    }

    #[test]
    fn test_extended_scale() {
        let config = ConverterConfig {
            scale: Scale::Extended,
            ..ConverterConfig::default()
        };
        let converter = NumberConverter::new(config);
        let sextillion = format!("1{}", "0".repeat(21));
        assert_eq!(converter.convert_integer(sextillion).unwrap(), "one sextillion");
        assert!(converter.convert_integer(u128::MAX).is_err());
        assert!(converter.convert_integer(i128::MAX / 10_000).is_ok());
    }

    #[test]
    fn test_extended_boundary() {
        let converter = NumberConverter::new(ConverterConfig::lenient());
        let largest = converter.convert_integer("9".repeat(36)).unwrap();
        assert!(largest.starts_with("nine hundred and ninety-nine decillion, "));
        assert!(largest.ends_with("nine hundred and ninety-nine"));
        assert_eq!(
            converter.convert_integer("9".repeat(37)),
            Err(ConversionError::TooLarge)
        );
    }

    #[test]
    fn test_u64_max() {
        let converter = NumberConverter::default();
        assert_eq!(
            converter.convert_integer(u64::MAX).unwrap(),
            "eighteen quintillion, four hundred and forty-six quadrillion, \
             seven hundred and forty-four trillion, seventy-three billion, \
             seven hundred and nine million, five hundred and fifty-one thousand, \
             six hundred and fifteen"
        );
    }

    #[test]
    fn test_extract_uses_token_mode() {
        let strict = NumberConverter::default();
        assert_eq!(
            strict.extract_and_convert("ticket #12"),
            Err(ConversionError::Invalid)
        );

        let lenient = NumberConverter::new(ConverterConfig {
            token_mode: TokenMode::Lenient,
            ..ConverterConfig::default()
        });
        assert_eq!(lenient.extract_and_convert("ticket #12").unwrap(), "twelve");
    }

    #[test]
    fn test_extract_negative_token() {
        let converter = NumberConverter::default();
        assert_eq!(
            converter.extract_and_convert("It fell to -40 overnight").unwrap(),
            "negative forty"
        );
    }

    #[test]
    fn test_text_variants_render_errors() {
        let converter = NumberConverter::default();
        assert_eq!(converter.extract_and_convert_text("nothing"), "number invalid");
        assert_eq!(
            converter.convert_integer_text("1".repeat(22)),
            "number too large"
        );
        assert_eq!(converter.convert_integer_text(15u8), "fifteen");
    }
}
