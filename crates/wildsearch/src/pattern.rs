// std imports
use std::fmt;

// local imports
use crate::{
    accumulator::{AllStarts, LeftmostStart},
    search::search,
    span::Span,
};

// ---

/// A wildcard pattern for searching text.
///
/// Patterns are created from byte strings containing wildcard characters:
/// - `*` matches zero or more bytes
/// - `?` matches exactly one byte
/// - any other byte matches itself
///
/// A pattern is searched for in every span of a text, not only in the text as a whole.
///
/// # Examples
///
/// ```
/// use wildsearch::{Pattern, Span};
///
/// let pattern = Pattern::new("ba*ab");
/// assert!(pattern.find_all("baaabab").contains(&Span::new(0, 5)));
/// assert_eq!(pattern.find_longest("baaabab"), Some(Span::new(0, 7)));
/// assert!(!pattern.matches("baaaba"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all inputs are valid patterns.
    /// Consecutive `*` wildcards are collapsed into one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildsearch::Pattern;
    ///
    /// assert_eq!(Pattern::new("a***b").to_string(), "a*b");
    /// assert_eq!(Pattern::new("").len(), 0);
    /// ```
    pub fn new(raw: impl AsRef<[u8]>) -> Self {
        Self {
            tokens: compile(raw.as_ref()),
        }
    }

    /// Creates a pattern from tokens, keeping them exactly as given.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens in the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns every span of `text` that the pattern matches, in ascending order.
    pub fn find_all(&self, text: impl AsRef<[u8]>) -> Vec<Span> {
        let mut spans = search::<AllStarts>(text.as_ref(), &self.tokens);
        spans.sort_unstable();
        spans.dedup();
        spans
    }

    /// Returns the longest span of `text` that the pattern matches.
    ///
    /// Ties are broken toward the smallest start and then the smallest end.
    #[inline]
    pub fn find_longest(&self, text: impl AsRef<[u8]>) -> Option<Span> {
        search::<LeftmostStart>(text.as_ref(), &self.tokens)
    }

    /// Tests whether the pattern matches the whole `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildsearch::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.rs.bak"));
    /// ```
    pub fn matches(&self, text: impl AsRef<[u8]>) -> bool {
        let text = text.as_ref();
        self.find_longest(text) == Some(Span::new(0, text.len()))
    }
}

impl FromIterator<Token> for Pattern {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw: Vec<u8> = self.tokens.iter().map(|token| token.byte()).collect();
        write!(f, "{}", String::from_utf8_lossy(&raw))
    }
}

// ---

/// A single element of a compiled [`Pattern`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Matches exactly the given byte.
    Literal(u8),
    /// Matches any single byte (`?`).
    Any,
    /// Matches any number of bytes, including none (`*`).
    Many,
}

impl Token {
    /// Tests whether the token consumes exactly the byte `b`.
    ///
    /// [`Token::Many`] never does; it is handled separately by the search.
    #[inline]
    pub fn accepts(self, b: u8) -> bool {
        match self {
            Self::Literal(c) => c == b,
            Self::Any => true,
            Self::Many => false,
        }
    }

    #[inline]
    fn byte(self) -> u8 {
        match self {
            Self::Literal(c) => c,
            Self::Any => b'?',
            Self::Many => b'*',
        }
    }
}

impl From<u8> for Token {
    #[inline]
    fn from(b: u8) -> Self {
        match b {
            b'*' => Self::Many,
            b'?' => Self::Any,
            _ => Self::Literal(b),
        }
    }
}

fn compile(raw: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len());
    for &b in raw {
        let token = Token::from(b);
        if token == Token::Many && tokens.last() == Some(&Token::Many) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}
