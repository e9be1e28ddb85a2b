//! Numeral module - optionally signed integers of any length

use crate::chunk::Chunk;
use crate::outcome::ConversionError;
use std::fmt;
use std::str::FromStr;

/// A parsed integer held as its canonical decimal digits
///
/// Digits carry no sign and no leading zeros (`"0"` for zero), so inputs
/// longer than any machine integer still reach the magnitude check instead
/// of overflowing. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    negative: bool,
    digits: String,
}

impl Numeral {
    /// Parse an optionally signed decimal integer
    ///
    /// Surrounding whitespace is ignored. One leading `-` or `+` is accepted;
    /// everything after it must be ASCII digits.
    ///
    /// # Errors
    /// Returns [`ConversionError::Invalid`] for empty input, inner whitespace,
    /// separators, a second sign or any other non-digit character.
    ///
    /// # Examples
    ///
    /// ```
    /// use numwords_domain::{ConversionError, Numeral};
    ///
    /// let n = Numeral::parse(" -0042 ").unwrap();
    /// assert!(n.is_negative());
    /// assert_eq!(n.digits(), "42");
    ///
    /// assert_eq!(Numeral::parse("23 456"), Err(ConversionError::Invalid));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ConversionError> {
        let text = text.trim();
        let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (false, rest)
        } else {
            (false, text)
        };

        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::Invalid);
        }

        Ok(Self::from_digits(negative, unsigned))
    }

    /// Build from a sign and a digit string known to be all ASCII digits
    fn from_digits(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self {
                negative: false,
                digits: "0".to_string(),
            };
        }
        Self {
            negative,
            digits: trimmed.to_string(),
        }
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Canonical digits of the absolute value
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of base-1000 groups in the absolute value
    pub fn chunk_count(&self) -> usize {
        self.digits.len().div_ceil(3)
    }

    /// Base-1000 groups of the absolute value, least significant first
    pub fn chunks(&self) -> Vec<Chunk> {
        Chunk::split_digits(&self.digits)
    }
}

impl FromStr for Numeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.digits)
        } else {
            f.write_str(&self.digits)
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(value: $t) -> Self {
                    Self::from_digits(value < 0, &value.unsigned_abs().to_string())
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(value: $t) -> Self {
                    Self::from_digits(false, &value.to_string())
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

/// Anything a converter accepts as a number: integers or numeric strings
pub trait IntoNumeral {
    /// Convert into a [`Numeral`], failing only for malformed strings
    fn into_numeral(self) -> Result<Numeral, ConversionError>;
}

macro_rules! impl_into_numeral_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoNumeral for $t {
                fn into_numeral(self) -> Result<Numeral, ConversionError> {
                    Ok(Numeral::from(self))
                }
            }
        )*
    };
}

impl_into_numeral_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoNumeral for Numeral {
    fn into_numeral(self) -> Result<Numeral, ConversionError> {
        Ok(self)
    }
}

impl IntoNumeral for &Numeral {
    fn into_numeral(self) -> Result<Numeral, ConversionError> {
        Ok(self.clone())
    }
}

impl IntoNumeral for &str {
    fn into_numeral(self) -> Result<Numeral, ConversionError> {
        Numeral::parse(self)
    }
}

impl IntoNumeral for String {
    fn into_numeral(self) -> Result<Numeral, ConversionError> {
        Numeral::parse(&self)
    }
}

impl IntoNumeral for &String {
    fn into_numeral(self) -> Result<Numeral, ConversionError> {
        Numeral::parse(self)
    }
}
