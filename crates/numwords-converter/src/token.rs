//! Locating the first integer token in free text

use crate::config::TokenMode;
use numwords_domain::ConversionError;
use regex::Regex;
use std::sync::OnceLock;

/// Marker and currency prefixes that turn a digit run into an identifier or amount
const MARKERS: [char; 5] = ['#', '$', '\u{00A3}', '\u{20AC}', '%'];

/// Characters that join digit groups in decimals or grouped thousands
const GROUP_SEPARATORS: [char; 4] = [',', '.', '_', '\''];

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[-+]?[0-9]+").expect("number pattern is valid"))
}

/// An optionally signed digit run found in a larger text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerToken<'a> {
    /// Matched text, sign included
    pub text: &'a str,
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
}

/// Find the first signed digit run in `text`
///
/// The sign must touch the digits. Only the first run is considered: if it
/// fails the [`TokenMode::Strict`] neighbour checks the text is invalid, even
/// when a later run would pass.
///
/// # Errors
/// Returns [`ConversionError::Invalid`] when there is no digit run or the
/// first run is rejected.
///
/// # Examples
///
/// ```
/// use numwords_converter::{find_integer_token, TokenMode};
///
/// let token = find_integer_token("We processed 9121 records.", TokenMode::Strict).unwrap();
/// assert_eq!(token.text, "9121");
///
/// assert!(find_integer_token("missing type #65678.", TokenMode::Strict).is_err());
/// assert_eq!(
///     find_integer_token("missing type #65678.", TokenMode::Lenient).unwrap().text,
///     "65678"
/// );
/// ```
pub fn find_integer_token(text: &str, mode: TokenMode) -> Result<IntegerToken<'_>, ConversionError> {
    let found = number_pattern()
        .find(text)
        .ok_or(ConversionError::Invalid)?;

    let token = IntegerToken {
        text: found.as_str(),
        start: found.start(),
        end: found.end(),
    };

    if mode == TokenMode::Strict {
        let before = text[..token.start].chars().next_back();
        let after = &text[token.end..];
        if !is_clean_left_boundary(before) || continues_as_number(after) {
            return Err(ConversionError::Invalid);
        }
    }

    Ok(token)
}

/// Whether the character before a token leaves it a standalone integer
///
/// Markers (`#`, `$`, `%`...), group separators, digits and a doubled sign
/// reject the token; any other neighbour, `:` and `=` included, is fine.
fn is_clean_left_boundary(before: Option<char>) -> bool {
    match before {
        None => true,
        Some(c) => {
            let joined = matches!(c, ',' | '.' | '_' | '-' | '+') || c.is_ascii_digit();
            !(joined || MARKERS.contains(&c))
        }
    }
}

/// Whether the text after a digit run carries on a decimal, grouped or
/// exponent form (`,9`, ` 456`, `.5`, `e10`)
fn continues_as_number(after: &str) -> bool {
    let mut chars = after.chars();
    let first = chars.next();
    let second = chars.next();
    let third = chars.next();
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());

    match first {
        Some(c) if GROUP_SEPARATORS.contains(&c) || c.is_whitespace() => is_digit(second),
        Some('e') | Some('E') => {
            is_digit(second) || (matches!(second, Some('+') | Some('-')) && is_digit(third))
        }
        _ => false,
    }
}
