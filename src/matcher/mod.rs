//! Exact substring matchers.
//!
//! Every matcher reports all (possibly overlapping) occurrences of a pattern
//! as a strictly increasing [`MatchSet`]. All of them agree on every input:
//!
//! - empty pattern: every offset `0..=n`
//! - pattern longer than text: no matches
//!
//! ## Modules
//!
//! - [`naive`] - brute-force scan
//! - [`kmp`] - Knuth-Morris-Pratt using the LPS failure function
//! - [`rabin_karp`] - rolling polynomial hash with verification
//! - [`boyer_moore`] - bad-character and good-suffix shifts

pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;

pub use boyer_moore::BoyerMoore;
pub use kmp::Kmp;
pub use naive::Naive;
pub use rabin_karp::RabinKarp;

use crate::error::Error;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered, strictly increasing match offsets into a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<usize>);

impl MatchSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Result for an empty pattern: every offset from 0 to `n` inclusive
    pub fn all_offsets(n: usize) -> Self {
        Self((0..=n).collect())
    }

    #[inline]
    pub(crate) fn push(&mut self, offset: usize) {
        debug_assert!(self.0.last().is_none_or(|&last| last < offset));
        self.0.push(offset);
    }

    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for MatchSet {
    fn from(mut offsets: Vec<usize>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self(offsets)
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[usize]> for MatchSet {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<usize>> for MatchSet {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for MatchSet {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0 == other
    }
}

/// Identifies a matching strategy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Naive,
    #[serde(rename = "KMP")]
    Kmp,
    RabinKarp,
    BoyerMoore,
    GoCrazy,
}

impl Algorithm {
    /// All algorithms, in default registration order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::RabinKarp,
        Algorithm::BoyerMoore,
        Algorithm::GoCrazy,
    ];

    /// Canonical name used by policies and harnesses
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Kmp => "KMP",
            Algorithm::RabinKarp => "RabinKarp",
            Algorithm::BoyerMoore => "BoyerMoore",
            Algorithm::GoCrazy => "GoCrazy",
        }
    }

    /// Run this algorithm with its default configuration
    pub fn search<S: Symbol>(self, text: &[S], pattern: &[S]) -> MatchSet {
        match self {
            Algorithm::Naive => naive::search(text, pattern),
            Algorithm::Kmp => kmp::search(text, pattern),
            Algorithm::RabinKarp => rabin_karp::search(text, pattern),
            Algorithm::BoyerMoore => boyer_moore::search(text, pattern),
            Algorithm::GoCrazy => crate::select::hybrid::search(text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "naive" | "bruteforce" => Ok(Algorithm::Naive),
            "kmp" | "knuthmorrispratt" => Ok(Algorithm::Kmp),
            "rabinkarp" | "rk" => Ok(Algorithm::RabinKarp),
            "boyermoore" | "bm" => Ok(Algorithm::BoyerMoore),
            "gocrazy" | "hybrid" => Ok(Algorithm::GoCrazy),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A substring search strategy over symbols of type `S`.
///
/// Implementations hold no per-call state; every table they need is built
/// inside `search` and dropped on return.
pub trait Matcher<S: Symbol>: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet;

    fn name(&self) -> &'static str {
        self.algorithm().name()
    }
}

/// Search `&str` inputs byte-wise with any matcher
pub fn search_str<M: Matcher<u8> + ?Sized>(matcher: &M, text: &str, pattern: &str) -> MatchSet {
    matcher.search(text.as_bytes(), pattern.as_bytes())
}
