use super::lps;
use crate::symbol::{COMPACT_RANGE, Symbol};
use serde::{Deserialize, Serialize};

/// Classification signals for one `(text, pattern)` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub pattern_length: usize,
    pub text_length: usize,
    pub unique_symbol_count: usize,
    pub binary_ratio: f64,
    pub repeat_score: f64,
}

impl Features {
    /// Compute every signal eagerly, sampling `sample_limit` text symbols
    /// for the binary ratio.
    ///
    /// The dispatcher and policies call the individual functions instead so
    /// that signals a branch never reads are never computed.
    pub fn extract<S: Symbol>(text: &[S], pattern: &[S], sample_limit: usize) -> Self {
        Self {
            pattern_length: pattern.len(),
            text_length: text.len(),
            unique_symbol_count: unique_symbol_count(pattern),
            binary_ratio: binary_ratio(text, sample_limit),
            repeat_score: repeat_score(pattern),
        }
    }

    /// Whether the binary ratio is strictly above `threshold`
    pub fn is_binary(&self, threshold: f64) -> bool {
        self.binary_ratio > threshold
    }
}

/// Largest LPS value divided by the pattern length, 0.0 for an empty pattern
pub fn repeat_score<S: Symbol>(pattern: &[S]) -> f64 {
    if pattern.is_empty() {
        return 0.0;
    }
    lps::max_border(pattern) as f64 / pattern.len() as f64
}

/// Distinct compact-range symbols in the pattern.
///
/// A non-empty pattern made only of wide symbols counts as 1.
pub fn unique_symbol_count<S: Symbol>(pattern: &[S]) -> usize {
    let mut seen = [false; COMPACT_RANGE as usize];
    let mut count = 0;

    for &symbol in pattern {
        if symbol.is_compact() {
            let slot = &mut seen[symbol.code() as usize];
            if !*slot {
                *slot = true;
                count += 1;
            }
        }
    }

    if count == 0 && !pattern.is_empty() {
        1
    } else {
        count
    }
}

/// Fraction of control symbols (tab, LF and CR excluded) among the first
/// `limit` symbols of `text`. An empty sample has ratio 0.0.
pub fn binary_ratio<S: Symbol>(text: &[S], limit: usize) -> f64 {
    let sample = &text[..text.len().min(limit)];
    if sample.is_empty() {
        return 0.0;
    }

    let control = sample.iter().filter(|s| s.is_binary_control()).count();
    control as f64 / sample.len() as f64
}

/// Whether the sampled prefix of `text` has a binary ratio strictly above
/// `threshold`
pub fn is_binary<S: Symbol>(text: &[S], limit: usize, threshold: f64) -> bool {
    binary_ratio(text, limit) > threshold
}
