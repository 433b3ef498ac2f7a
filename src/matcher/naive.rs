//! Brute-force scan: O(n*m) worst case, O(n) when mismatches come early.

use super::{Algorithm, MatchSet, Matcher};
use crate::symbol::Symbol;

/// Compare the pattern against every alignment of the text
pub struct Naive;

impl<S: Symbol> Matcher<S> for Naive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet {
        search(text, pattern)
    }
}

pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchSet::all_offsets(n);
    }

    let mut matches = MatchSet::new();
    if m > n {
        return matches;
    }

    for i in 0..=n - m {
        // Short-circuits on the first mismatching symbol
        let window = &text[i..i + m];
        if window.iter().zip(pattern).all(|(a, b)| a == b) {
            matches.push(i);
        }
    }

    matches
}
