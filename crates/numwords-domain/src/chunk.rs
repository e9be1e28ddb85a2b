//! Chunk module - base-1000 digit groups

/// One base-1000 digit group of a number
///
/// `value` is in `0..1000`; `magnitude` is the group's position counted
/// from the least significant end, so the group is worth `value * 1000^magnitude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    value: u16,
    magnitude: usize,
}

impl Chunk {
    /// Create a chunk, or `None` if `value` is not below 1000
    pub fn new(value: u16, magnitude: usize) -> Option<Self> {
        (value < 1000).then_some(Self { value, magnitude })
    }

    /// Split a canonical decimal digit string into chunks, least significant first
    ///
    /// The input must contain ASCII digits only; callers obtain it from
    /// [`crate::Numeral::digits`].
    ///
    /// # Examples
    ///
    /// ```
    /// use numwords_domain::Chunk;
    ///
    /// let chunks = Chunk::split_digits("9121");
    /// let values: Vec<u16> = chunks.iter().map(|c| c.value()).collect();
    /// assert_eq!(values, [121, 9]);
    /// assert_eq!(chunks[1].magnitude(), 1);
    /// ```
    pub fn split_digits(digits: &str) -> Vec<Chunk> {
        let bytes = digits.as_bytes();
        let mut chunks = Vec::with_capacity(bytes.len().div_ceil(3));
        let mut end = bytes.len();
        let mut magnitude = 0;

        while end > 0 {
            let start = end.saturating_sub(3);
            let value = bytes[start..end]
                .iter()
                .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
            chunks.push(Chunk { value, magnitude });
            end = start;
            magnitude += 1;
        }

        chunks
    }

    /// Numeric value in `0..1000`
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Position of this group (0 = units, 1 = thousands, ...)
    pub fn magnitude(&self) -> usize {
        self.magnitude
    }

    /// Whether every digit of the group is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// The hundreds digit
    pub fn hundreds(&self) -> u16 {
        self.value / 100
    }

    /// The last two digits
    pub fn remainder(&self) -> u16 {
        self.value % 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(digits: &str) -> Vec<u16> {
        Chunk::split_digits(digits).iter().map(Chunk::value).collect()
    }

    #[test]
    fn test_new_rejects_four_digits() {
        assert!(Chunk::new(999, 0).is_some());
        assert!(Chunk::new(1000, 0).is_none());
    }

    #[test]
    fn test_split_short_numbers() {
        assert_eq!(values("7"), [7]);
        assert_eq!(values("536"), [536]);
        assert_eq!(values("1000"), [0, 1]);
    }

    #[test]
    fn test_split_large_number() {
        assert_eq!(values("66723107008"), [8, 107, 723, 66]);
        let magnitudes: Vec<usize> = Chunk::split_digits("66723107008")
            .iter()
            .map(Chunk::magnitude)
            .collect();
        assert_eq!(magnitudes, [0, 1, 2, 3]);
    }

    #[test]
    fn test_split_empty_is_empty() {
        assert!(Chunk::split_digits("").is_empty());
    }

    #[test]
    fn test_hundreds_and_remainder() {
        let chunk = Chunk::new(536, 0).unwrap();
        assert_eq!(chunk.hundreds(), 5);
        assert_eq!(chunk.remainder(), 36);
        assert!(!chunk.is_zero());
        assert!(Chunk::new(0, 2).unwrap().is_zero());
    }
}
