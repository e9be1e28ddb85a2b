//! Phrase construction for chunks and whole numbers

use numwords_domain::{Chunk, Lexicon};

/// Convert a value in `0..1000` to words
///
/// Zero yields an empty phrase; the caller drops the whole group. A hundreds
/// digit is followed by "and" when a non-zero remainder follows, and
/// compound tens are hyphenated.
///
/// # Panics
/// Panics if `n >= 1000`
///
/// # Examples
///
/// ```
/// use numwords_converter::convert_three_digit_chunk;
/// use numwords_domain::Lexicon;
///
/// let lexicon = Lexicon::STANDARD;
/// assert_eq!(convert_three_digit_chunk(&lexicon, 536), "five hundred and thirty-six");
/// assert_eq!(convert_three_digit_chunk(&lexicon, 700), "seven hundred");
/// assert_eq!(convert_three_digit_chunk(&lexicon, 0), "");
/// ```
pub fn convert_three_digit_chunk(lexicon: &Lexicon, n: u16) -> String {
    let Some(chunk) = Chunk::new(n, 0) else {
        panic!("chunk value {} out of range", n);
    };

    if chunk.is_zero() {
        return String::new();
    }

    let hundreds = chunk.hundreds();
    let remainder = chunk.remainder();
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if hundreds > 0 {
        parts.push(format!("{} hundred", lexicon.ones(hundreds)));
        if remainder > 0 {
            parts.push("and".to_string());
        }
    }

    if remainder > 0 {
        if remainder < 20 {
            parts.push(lexicon.ones(remainder).to_string());
        } else {
            let mut text = lexicon.tens(remainder / 10).to_string();
            let unit = remainder % 10;
            if unit > 0 {
                text.push('-');
                text.push_str(lexicon.ones(unit));
            }
            parts.push(text);
        }
    }

    parts.join(" ")
}

/// Phrase for one non-zero chunk together with its numeric value
#[derive(Debug)]
struct Segment {
    value: u16,
    text: String,
}

/// Collects chunk phrases and joins them with the final conjunction rule
///
/// Segments are pushed least significant first, as chunks are extracted.
#[derive(Debug, Default)]
pub(crate) struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add the phrase for a chunk, or `None` if its magnitude has no word
    ///
    /// Zero chunks contribute nothing, not even their magnitude word.
    pub(crate) fn push_chunk(&mut self, lexicon: &Lexicon, chunk: Chunk) -> Option<()> {
        let magnitude = lexicon.magnitude(chunk.magnitude())?;
        if chunk.is_zero() {
            return Some(());
        }

        let words = convert_three_digit_chunk(lexicon, chunk.value());
        let text = format!("{} {}", words, magnitude).trim().to_string();
        self.segments.push(Segment {
            value: chunk.value(),
            text,
        });
        Some(())
    }

    /// Number of non-zero segments collected so far
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Order segments most significant first and join them
    ///
    /// When there is more than one segment and the units chunk is below 100,
    /// the last two segments are joined by " and "; every other boundary is
    /// ", ".
    pub(crate) fn finish(self) -> String {
        let mut ordered: Vec<Segment> = self.segments.into_iter().rev().collect();

        if ordered.len() > 1 && ordered.last().is_some_and(|s| s.value < 100) {
            if let (Some(last), Some(previous)) = (ordered.pop(), ordered.pop()) {
                ordered.push(Segment {
                    value: last.value,
                    text: format!("{} and {}", previous.text, last.text),
                });
            }
        }

        ordered
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(n: u16) -> String {
        convert_three_digit_chunk(&Lexicon::STANDARD, n)
    }

    fn join(digits: &str) -> String {
        let lexicon = Lexicon::STANDARD;
        let mut builder = SegmentBuilder::new();
        for c in Chunk::split_digits(digits) {
            builder.push_chunk(&lexicon, c).unwrap();
        }
        builder.finish()
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(chunk(1), "one");
        assert_eq!(chunk(11), "eleven");
        assert_eq!(chunk(19), "nineteen");
    }

    #[test]
    fn test_tens() {
        assert_eq!(chunk(20), "twenty");
        assert_eq!(chunk(42), "forty-two");
        assert_eq!(chunk(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(chunk(100), "one hundred");
        assert_eq!(chunk(107), "one hundred and seven");
        assert_eq!(chunk(110), "one hundred and ten");
        assert_eq!(chunk(999), "nine hundred and ninety-nine");
    }

    #[test]
    #[should_panic]
    fn test_four_digit_chunk_panics() {
        chunk(1000);
    }

    #[test]
    fn test_comma_between_groups_with_hundreds() {
        assert_eq!(join("9121"), "nine thousand, one hundred and twenty-one");
    }

    #[test]
    fn test_and_before_small_units_group() {
        assert_eq!(join("10022"), "ten thousand and twenty-two");
        assert_eq!(join("1000001"), "one million and one");
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(join("1000000"), "one million");
        assert_eq!(join("2000300"), "two million, three hundred");
        assert_eq!(join("5000000040"), "five billion and forty");
    }

    #[test]
    fn test_only_last_boundary_becomes_and() {
        assert_eq!(
            join("66723107008"),
            "sixty-six billion, seven hundred and twenty-three million, \
             one hundred and seven thousand and eight"
        );
    }

    #[test]
    fn test_missing_magnitude_is_reported() {
        let lexicon = Lexicon::STANDARD;
        let mut builder = SegmentBuilder::new();
        let beyond = Chunk::new(1, lexicon.magnitude_count()).unwrap();
        assert!(builder.push_chunk(&lexicon, beyond).is_none());
        assert_eq!(builder.len(), 0);
    }
}
