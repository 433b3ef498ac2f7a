//! Rabin-Karp: rolling polynomial hash over a sliding window.
//!
//! Hash equality only nominates a candidate; every candidate is verified
//! symbol by symbol before it is reported. With the default small prime,
//! collisions are frequent, so verification is load-bearing.

use super::{Algorithm, MatchSet, Matcher};
use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// Alphabet radix and modulus of the rolling hash.
///
/// Only constructed through [`RollingHashParams::new`] or `Default`, so every
/// value has been checked for a usable modulus and 64-bit headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHashParams {
    radix: i64,
    prime: i64,
}

impl Default for RollingHashParams {
    fn default() -> Self {
        Self {
            radix: 256,
            prime: 101,
        }
    }
}

impl RollingHashParams {
    pub fn new(radix: i64, prime: i64) -> Result<Self> {
        let params = Self { radix, prime };
        params.validate()?;
        Ok(params)
    }

    pub fn radix(&self) -> i64 {
        self.radix
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// Reject non-positive or degenerate parameters, and those whose
    /// intermediate products could overflow `i64`
    fn validate(&self) -> Result<()> {
        if self.radix < 2 || self.prime < 2 {
            return Err(Error::Config(format!(
                "rolling hash radix and prime must be >= 2 (radix={}, prime={})",
                self.radix, self.prime
            )));
        }
        // Intermediates reach radix * prime + prime and prime * prime in magnitude
        let bound = self
            .radix
            .checked_mul(self.prime)
            .and_then(|p| p.checked_add(self.prime))
            .and(self.prime.checked_mul(self.prime));
        if bound.is_none() {
            return Err(Error::Config(format!(
                "rolling hash radix {} and prime {} overflow 64-bit arithmetic",
                self.radix, self.prime
            )));
        }
        Ok(())
    }
}

/// Hash of a fixed-size window that can slide one symbol to the right.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: RollingHashParams,
    /// radix^(m-1) mod prime, the weight of the leading symbol
    lead_weight: i64,
    value: i64,
}

impl RollingHash {
    /// Hash the initial window
    pub fn new<S: Symbol>(params: RollingHashParams, window: &[S]) -> Self {
        let mut lead_weight = 1;
        for _ in 1..window.len() {
            lead_weight = (lead_weight * params.radix) % params.prime;
        }

        Self {
            params,
            lead_weight,
            value: hash_of(params, window),
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Drop `leading` from the front of the window and append `trailing`
    #[inline]
    pub fn roll<S: Symbol>(&mut self, leading: S, trailing: S) {
        let RollingHashParams { radix, prime } = self.params;
        let lead = reduce(leading, prime) * self.lead_weight % prime;
        let mut next = (radix * (self.value - lead) + reduce(trailing, prime)) % prime;
        if next < 0 {
            next += prime;
        }
        self.value = next;
    }
}

#[inline]
fn reduce<S: Symbol>(symbol: S, prime: i64) -> i64 {
    symbol.code() as i64 % prime
}

fn hash_of<S: Symbol>(params: RollingHashParams, symbols: &[S]) -> i64 {
    symbols.iter().fold(0, |hash, &s| {
        (params.radix * hash + reduce(s, params.prime)) % params.prime
    })
}

/// Rabin-Karp with the default radix and prime
pub struct RabinKarp;

impl<S: Symbol> Matcher<S> for RabinKarp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp
    }

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet {
        search(text, pattern)
    }
}

pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchSet {
    search_with(RollingHashParams::default(), text, pattern)
}

/// Search with explicit hash parameters
pub fn search_with<S: Symbol>(params: RollingHashParams, text: &[S], pattern: &[S]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchSet::all_offsets(n);
    }

    let mut matches = MatchSet::new();
    if m > n {
        return matches;
    }

    let pattern_hash = hash_of(params, pattern);
    let mut window = RollingHash::new(params, &text[..m]);

    for i in 0..=n - m {
        if window.value() == pattern_hash && text[i..i + m] == *pattern {
            matches.push(i);
        }

        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }

    matches
}
