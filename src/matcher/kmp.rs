//! Knuth-Morris-Pratt: linear-time scan driven by the LPS failure function.

use super::{Algorithm, MatchSet, Matcher};
use crate::analysis::lps;
use crate::symbol::Symbol;

pub struct Kmp;

impl<S: Symbol> Matcher<S> for Kmp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet {
        search(text, pattern)
    }
}

/// Scan `text` once, never moving the text cursor backwards.
///
/// The pattern cursor `j` only shrinks through failure links, so the total
/// work is bounded by `2n` comparisons plus `O(m)` preprocessing.
pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchSet::all_offsets(n);
    }

    let lps = lps::build(pattern);
    let mut matches = MatchSet::new();

    let mut i = 0;
    let mut j = 0;
    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    matches
}
