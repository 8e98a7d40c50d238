//! Testing utilities for internal use.
//!
//! The reference searches here walk the raw pattern recursively from every start offset,
//! sharing nothing with the table-driven search they are used to check.

// std imports
use std::iter::{once, repeat_n};

// third-party imports
use itertools::Itertools;
use rand::{
    SeedableRng,
    distr::{Distribution, StandardUniform},
    rngs::StdRng,
};

// local imports
use crate::span::Span;

/// Patterns used for cross-checking searches over texts made of `a` and `b`.
pub const AB_PATTERNS: &[&str] = &[
    "*****ba*****ab",
    "ba*****a",
    "ba*ab",
    "a*ab",
    "a*****ab",
    "*a*****ab",
    "ba*ab****",
    "****",
    "*",
    "aa?ab",
    "b*b",
    "a*a",
    "baaabab",
    "?baaabab",
    "*baaaba*",
    "?",
    "",
];

/// Returns every text over `{a, b}` with length up to `max_len`, shortest first.
pub fn ab_texts(max_len: usize) -> impl Iterator<Item = String> {
    once(String::new()).chain((1..=max_len).flat_map(|len| {
        repeat_n(['a', 'b'], len)
            .multi_cartesian_product()
            .map(String::from_iter)
    }))
}

/// Returns a pseudo-random text over `{a, b}`, the same for the same `seed`.
pub fn ab_text(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| if StandardUniform.sample(&mut rng) { 'b' } else { 'a' })
        .collect()
}

/// Finds every matching span by brute force.
pub fn naive_all(text: &str, pattern: &str) -> Vec<Span> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    let mut spans = Vec::new();
    for start in 0..=text.len() {
        walk(&text[start..], pattern, 0, &mut |len| spans.push(Span::new(start, start + len)));
    }
    spans.sort();
    spans.dedup();
    spans
}

/// Finds the longest matching span by brute force.
pub fn naive_longest(text: &str, pattern: &str) -> Option<Span> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    let mut longest: Option<Span> = None;
    for start in 0..=text.len() {
        walk(&text[start..], pattern, 0, &mut |len| {
            let span = Span::new(start, start + len);
            let better = match longest {
                None => true,
                Some(longest) => span.len() > longest.len() || (span.len() == longest.len() && span < longest),
            };
            if better {
                longest = Some(span);
            }
        });
    }
    longest
}

fn walk<F: FnMut(usize)>(text: &[u8], pattern: &[u8], pos: usize, emit: &mut F) {
    let Some((&p, rest)) = pattern.split_first() else {
        emit(pos);
        return;
    };

    if p == b'*' {
        walk(text, rest, pos, emit);
    }

    let Some(&c) = text.get(pos) else {
        return;
    };

    if p == b'?' || p == c {
        walk(text, rest, pos + 1, emit);
    }
    if p == b'*' {
        walk(text, pattern, pos + 1, emit);
    }
}
