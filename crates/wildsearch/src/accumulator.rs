//! Values carried in the cells of the search table.
//!
//! Each cell describes the start offsets from which a pattern prefix matches the text up to
//! the current position. An [`Accumulator`] decides how much of that information is kept,
//! which in turn decides what the search produces and how much memory it needs.

// third-party imports
use itertools::Itertools;

// local imports
use crate::span::Span;

// ---

/// Merge algebra over candidate match start offsets.
///
/// The [`Default`] value stands for "no candidates" and must be the identity of [`merge`](Accumulator::merge).
pub trait Accumulator: Clone + Default {
    /// Result collected over the whole search.
    type Output: Default;

    /// Returns a value holding a single candidate starting at `offset`.
    fn point(offset: usize) -> Self;

    /// Combines candidates of two values describing the same cell.
    ///
    /// Must be associative and commutative.
    fn merge(a: &Self, b: &Self) -> Self;

    /// Folds the candidates into `output` as matches ending at `end`.
    fn finalize(&self, output: &mut Self::Output, end: usize);
}

// ---

/// Keeps every candidate start offset, producing all matching spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllStarts {
    starts: Vec<usize>,
}

impl AllStarts {
    /// Returns the candidate start offsets in ascending order.
    #[inline]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

impl Accumulator for AllStarts {
    type Output = Vec<Span>;

    #[inline]
    fn point(offset: usize) -> Self {
        Self { starts: vec![offset] }
    }

    fn merge(a: &Self, b: &Self) -> Self {
        if a.starts.is_empty() {
            return b.clone();
        }
        if b.starts.is_empty() {
            return a.clone();
        }

        let starts = a.starts.iter().merge(&b.starts).dedup().copied().collect();
        Self { starts }
    }

    fn finalize(&self, output: &mut Vec<Span>, end: usize) {
        output.extend(self.starts.iter().map(|&start| Span::new(start, end)));
    }
}

// ---

/// Keeps only the leftmost candidate start offset, producing the longest matching span.
///
/// For a fixed end offset the leftmost start always gives the longest span,
/// so the other candidates can never win and are dropped early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeftmostStart(Option<usize>);

impl LeftmostStart {
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.0
    }
}

impl Accumulator for LeftmostStart {
    type Output = Option<Span>;

    #[inline]
    fn point(offset: usize) -> Self {
        Self(Some(offset))
    }

    #[inline]
    fn merge(a: &Self, b: &Self) -> Self {
        match (a.0, b.0) {
            (Some(a), Some(b)) => Self(Some(a.min(b))),
            (Some(a), None) => Self(Some(a)),
            (None, b) => Self(b),
        }
    }

    fn finalize(&self, best: &mut Option<Span>, end: usize) {
        let Some(start) = self.0 else {
            return;
        };

        let candidate = Span::new(start, end);
        let better = match best {
            None => true,
            Some(best) => {
                candidate.len() > best.len() || (candidate.len() == best.len() && candidate < *best)
            }
        };
        if better {
            *best = Some(candidate);
        }
    }
}
