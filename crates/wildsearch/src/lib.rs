//! Wildcard substring search.
//!
//! Finds every span of a text that a wildcard pattern matches in its entirety, or only the
//! longest such span. Patterns consist of literal bytes, `?` (exactly one byte) and `*` (zero
//! or more bytes).
//!
//! ```
//! use wildsearch::{Span, match_all, match_longest};
//!
//! assert_eq!(match_all("ab", "a?"), vec![Span::new(0, 2)]);
//! assert_eq!(match_longest("baaabab", "b*b"), Some(Span::new(0, 7)));
//! assert_eq!(match_longest("aaa", "b"), None);
//! ```

// public modules
pub mod accumulator;
pub mod pattern;
pub mod search;
pub mod span;

// private modules
mod table;

#[cfg(test)]
mod testing;

// public uses
pub use accumulator::{Accumulator, AllStarts, LeftmostStart};
pub use pattern::{Pattern, Token};
pub use search::search;
pub use span::Span;

/// Returns every span of `text` that `pattern` matches exactly, sorted by [`Span`] ordering.
///
/// Time is `O(n² · m)` and auxiliary memory is `O(n · m)` in the worst case,
/// where `n` is the text length and `m` is the pattern length.
pub fn match_all(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Vec<Span> {
    Pattern::new(pattern).find_all(text)
}

/// Returns the longest span of `text` that `pattern` matches exactly.
///
/// Among spans of equal length the one with the smallest start wins, then the one with the
/// smallest end. Returns `None` if nothing matches.
///
/// Time is `O(n · m)` and auxiliary memory is `O(m)`.
pub fn match_longest(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Option<Span> {
    Pattern::new(pattern).find_longest(text)
}
