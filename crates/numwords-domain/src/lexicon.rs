//! Lexicon module - the static English vocabulary for numbers

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Indices 0 and 1 are never read; 10-19 come from ONES.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const STANDARD_MAGNITUDES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

const EXTENDED_MAGNITUDES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Read-only vocabulary used by the converter
///
/// The ones and tens tables are shared by every lexicon; only the magnitude
/// table differs. Index `i` of the magnitude table names chunk `i` of a
/// number (`1000^i`), with index 0 empty.
///
/// # Examples
///
/// ```
/// use numwords_domain::Lexicon;
///
/// let lexicon = Lexicon::STANDARD;
/// assert_eq!(lexicon.ones(7), "seven");
/// assert_eq!(lexicon.tens(4), "forty");
/// assert_eq!(lexicon.magnitude(2), Some("million"));
/// assert_eq!(lexicon.magnitude(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    magnitudes: &'static [&'static str],
}

impl Lexicon {
    /// Magnitudes up to "quintillion" (numbers below 10^21)
    pub const STANDARD: Lexicon = Lexicon {
        magnitudes: &STANDARD_MAGNITUDES,
    };

    /// Magnitudes up to "decillion" (numbers below 10^36)
    pub const EXTENDED: Lexicon = Lexicon {
        magnitudes: &EXTENDED_MAGNITUDES,
    };

    /// Word for a value in `0..20`
    ///
    /// # Panics
    /// Panics if `n >= 20`
    pub fn ones(&self, n: u16) -> &'static str {
        ONES[usize::from(n)]
    }

    /// Word for the tens digit `t` in `2..10` (`4` gives "forty")
    ///
    /// # Panics
    /// Panics if `t >= 10`
    pub fn tens(&self, t: u16) -> &'static str {
        TENS[usize::from(t)]
    }

    /// Magnitude word for a chunk index, `Some("")` for index 0
    pub fn magnitude(&self, index: usize) -> Option<&'static str> {
        self.magnitudes.get(index).copied()
    }

    /// Number of entries in the magnitude table
    ///
    /// This is also the largest number of base-1000 chunks a number may have.
    pub fn magnitude_count(&self) -> usize {
        self.magnitudes.len()
    }

    /// Check whether `word` is one of the non-empty magnitude names
    pub fn is_magnitude_word(&self, word: &str) -> bool {
        !word.is_empty() && self.magnitudes.contains(&word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_cover_zero_to_nineteen() {
        let lexicon = Lexicon::STANDARD;
        assert_eq!(lexicon.ones(0), "zero");
        assert_eq!(lexicon.ones(12), "twelve");
        assert_eq!(lexicon.ones(19), "nineteen");
    }

    #[test]
    fn test_tens_multiples() {
        let lexicon = Lexicon::STANDARD;
        let words: Vec<_> = (2..10).map(|t| lexicon.tens(t)).collect();
        assert_eq!(
            words,
            ["twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"]
        );
    }

    #[test]
    fn test_standard_magnitudes_reach_quintillion() {
        let lexicon = Lexicon::STANDARD;
        assert_eq!(lexicon.magnitude_count(), 7);
        assert_eq!(lexicon.magnitude(0), Some(""));
        assert_eq!(lexicon.magnitude(6), Some("quintillion"));
        assert_eq!(lexicon.magnitude(7), None);
    }

    #[test]
    fn test_extended_magnitudes_extend_standard() {
        let standard = Lexicon::STANDARD;
        let extended = Lexicon::EXTENDED;
        for i in 0..standard.magnitude_count() {
            assert_eq!(standard.magnitude(i), extended.magnitude(i));
        }
        assert_eq!(extended.magnitude(11), Some("decillion"));
        assert_eq!(extended.magnitude(12), None);
    }

    #[test]
    fn test_magnitude_indices_are_contiguous() {
        for lexicon in [Lexicon::STANDARD, Lexicon::EXTENDED] {
            for i in 1..lexicon.magnitude_count() {
                let word = lexicon.magnitude(i).unwrap();
                assert!(!word.is_empty(), "gap at magnitude index {}", i);
            }
        }
    }

    #[test]
    fn test_is_magnitude_word() {
        let lexicon = Lexicon::STANDARD;
        assert!(lexicon.is_magnitude_word("billion"));
        assert!(!lexicon.is_magnitude_word(""));
        assert!(!lexicon.is_magnitude_word("hundred"));
        assert!(!lexicon.is_magnitude_word("decillion"));
        assert!(Lexicon::EXTENDED.is_magnitude_word("decillion"));
    }
}
