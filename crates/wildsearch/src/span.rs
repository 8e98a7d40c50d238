// std imports
use std::{fmt, ops::Range};

// ---

/// A half-open `[start, end)` range of byte offsets into a searched text.
///
/// Spans order by `start` first and then by `end`, both ascending.
///
/// # Examples
///
/// ```
/// use wildsearch::Span;
///
/// let span = Span::new(1, 4);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.slice("abcdef"), b"bcd");
/// assert_eq!(span.extract("abcdef"), "bcd");
/// assert!(Span::new(1, 2) < Span::new(1, 3));
/// assert!(Span::new(1, 9) < Span::new(2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {} is past its end {}", start, end);
        Self { start, end }
    }

    /// Creates an empty span at the given offset.
    #[inline]
    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bytes covered by the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the part of `text` covered by the span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit into `text`.
    #[inline]
    pub fn slice<'a, T>(&self, text: &'a T) -> &'a [u8]
    where
        T: AsRef<[u8]> + ?Sized,
    {
        &text.as_ref()[self.range()]
    }

    /// Copies the part of `text` covered by the span into a new string.
    ///
    /// Invalid UTF-8 sequences, including characters cut by the span bounds,
    /// are replaced with `U+FFFD`.
    pub fn extract<T>(&self, text: &T) -> String
    where
        T: AsRef<[u8]> + ?Sized,
    {
        String::from_utf8_lossy(self.slice(text)).into_owned()
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
