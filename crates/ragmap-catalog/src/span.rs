//! Byte ranges into catalog source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(4..10);
        assert_eq!(span.start(), 4);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = Span::new(8..3);
        assert!(span.is_empty());
        assert_eq!(span.start(), 8);
    }
}
