//! Boyer-Moore with the bad-character and good-suffix rules.
//!
//! Both tables depend on the pattern alone and are rebuilt on every call.
//! The pattern is compared right to left; on a mismatch the alignment moves
//! by whichever rule allows the larger shift.

use super::{Algorithm, MatchSet, Matcher};
use crate::symbol::{COMPACT_RANGE, Symbol};
use ahash::AHashMap;

/// Returned by [`BadCharTable::last_occurrence`] for symbols not in the pattern
pub const NOT_FOUND: isize = -1;

/// Last index of each symbol in the pattern.
///
/// Compact codes live in a flat array; wide codes go to a hash map.
pub struct BadCharTable {
    compact: [isize; COMPACT_RANGE as usize],
    wide: AHashMap<u32, isize>,
}

impl BadCharTable {
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        let mut compact = [NOT_FOUND; COMPACT_RANGE as usize];
        let mut wide = AHashMap::new();

        for (i, &symbol) in pattern.iter().enumerate() {
            if symbol.is_compact() {
                compact[symbol.code() as usize] = i as isize;
            } else {
                wide.insert(symbol.code(), i as isize);
            }
        }

        Self { compact, wide }
    }

    #[inline]
    pub fn last_occurrence<S: Symbol>(&self, symbol: S) -> isize {
        if symbol.is_compact() {
            self.compact[symbol.code() as usize]
        } else {
            self.wide.get(&symbol.code()).copied().unwrap_or(NOT_FOUND)
        }
    }
}

/// Good-suffix shifts, indexed by one past the mismatch position.
///
/// Entry 0 is the shift after a full match; entry `k` (1..=m) the shift when
/// `pattern[k..]` matched and `pattern[k - 1]` did not. Every entry is >= 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0usize; m + 1];
        // border_pos[i]: start of the widest border of pattern[i..]
        let mut border_pos = vec![0usize; m + 1];

        // Pass 1: borders that can be extended to the left
        let mut i = m;
        let mut j = m + 1;
        border_pos[i] = j;
        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border_pos[j];
            }
            i -= 1;
            j -= 1;
            border_pos[i] = j;
        }

        // Pass 2: the matched suffix also occurs as a prefix of the pattern
        let mut j = border_pos[0];
        for (k, entry) in shift.iter_mut().enumerate() {
            if *entry == 0 {
                *entry = j;
            }
            if k == j {
                j = border_pos[j];
            }
        }

        Self { shift }
    }

    #[inline]
    pub fn shift(&self, k: usize) -> usize {
        self.shift[k]
    }

    #[inline]
    pub fn full_match_shift(&self) -> usize {
        self.shift[0]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }
}

/// Preprocessed pattern tables for one search
pub struct BoyerMooreTables {
    pub bad_char: BadCharTable,
    pub good_suffix: GoodSuffixTable,
}

impl BoyerMooreTables {
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        Self {
            bad_char: BadCharTable::new(pattern),
            good_suffix: GoodSuffixTable::new(pattern),
        }
    }
}

/// One alignment visited by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Alignment of the pattern in the text
    pub offset: usize,
    /// Mismatch position within the pattern, `None` on a full match
    pub mismatch: Option<usize>,
    /// Distance the alignment moves next
    pub shift: usize,
}

pub struct BoyerMoore;

impl<S: Symbol> Matcher<S> for BoyerMoore {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BoyerMoore
    }

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet {
        search(text, pattern)
    }
}

pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchSet {
    search_traced(text, pattern, |_| {})
}

/// Same as [`search`], reporting every alignment step to `on_step`
pub fn search_traced<S, F>(text: &[S], pattern: &[S], mut on_step: F) -> MatchSet
where
    S: Symbol,
    F: FnMut(Step),
{
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchSet::all_offsets(n);
    }

    let mut matches = MatchSet::new();
    if m > n {
        return matches;
    }

    let tables = BoyerMooreTables::new(pattern);

    let mut i = 0;
    while i <= n - m {
        // j counts the symbols still unmatched, scanning right to left
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[i + j - 1] {
            j -= 1;
        }

        let step = if j == 0 {
            matches.push(i);
            Step {
                offset: i,
                mismatch: None,
                shift: tables.good_suffix.full_match_shift(),
            }
        } else {
            let k = j - 1;
            let bad_char_shift = k as isize - tables.bad_char.last_occurrence(text[i + k]);
            let good_suffix_shift = tables.good_suffix.shift(k + 1) as isize;
            Step {
                offset: i,
                mismatch: Some(k),
                shift: bad_char_shift.max(good_suffix_shift).max(1) as usize,
            }
        };

        on_step(step);
        i += step.shift;
    }

    matches
}
