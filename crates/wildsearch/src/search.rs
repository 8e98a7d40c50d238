// std imports
use std::any::type_name;

// local imports
use crate::{accumulator::Accumulator, pattern::Token, table::Table};

// ---

/// Searches `text` for every span that `pattern` matches and folds the matches using `A`.
///
/// Cell `j` of row `i` holds the start offsets `s` such that the first `j` tokens of the
/// pattern match `text[s..i]`. The row for `i` is derived from the row for `i - 1`, so only
/// two rows are kept at any time. After each row is complete, its last cell is finalized
/// with `i` as the end offset.
///
/// # Examples
///
/// ```
/// use wildsearch::{AllStarts, LeftmostStart, Pattern, Span, search};
///
/// let pattern = Pattern::new("a*");
/// let mut all = search::<AllStarts>(b"ab", pattern.tokens());
/// all.sort();
/// assert_eq!(all, vec![Span::new(0, 1), Span::new(0, 2)]);
/// assert_eq!(search::<LeftmostStart>(b"ab", pattern.tokens()), Some(Span::new(0, 2)));
/// ```
pub fn search<A: Accumulator>(text: &[u8], pattern: &[Token]) -> A::Output {
    log::debug!(
        "search: text length {}, pattern length {}, accumulator {}",
        text.len(),
        pattern.len(),
        type_name::<A>()
    );

    let mut output = A::Output::default();
    let mut table = Table::new(pattern.len() + 1, A::default());

    for i in 0..=text.len() {
        let (prev, cur) = table.rows(i);
        cur[0] = A::point(i);

        for (j, &token) in pattern.iter().enumerate().map(|(j, token)| (j + 1, token)) {
            cur[j] = match (token, prev) {
                (Token::Many, Some(prev)) => A::merge(&cur[j - 1], &prev[j]),
                (Token::Many, None) => cur[j - 1].clone(),
                (_, Some(prev)) if token.accepts(text[i - 1]) => prev[j - 1].clone(),
                _ => A::default(),
            };
        }

        table.row(i)[pattern.len()].finalize(&mut output, i);
        table.advance(A::default());
    }

    output
}
