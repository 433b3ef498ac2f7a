//! Pre-analysis policies: name a matcher for an input without running it.
//!
//! A policy only recommends. Resolving the name and running the matcher is
//! left to the caller (see [`Registry::run`](super::Registry::run)).
//! Returning `None` means "skip the optimization and run every matcher".

use crate::analysis::{is_binary, repeat_score, unique_symbol_count};
use crate::config::PolicyThresholds;
use crate::error::Error;
use crate::matcher::Algorithm;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub trait ClassificationPolicy<S: Symbol>: Send + Sync {
    /// Recommend an algorithm, or `None` to run them all
    fn classify(&self, text: &[S], pattern: &[S]) -> Option<Algorithm>;

    /// Human-readable summary of the strategy
    fn description(&self) -> &'static str;

    /// Like [`classify`](Self::classify), tolerating absent inputs by
    /// recommending the naive matcher
    fn classify_input(&self, text: Option<&[S]>, pattern: Option<&[S]>) -> Option<Algorithm> {
        match (text, pattern) {
            (Some(text), Some(pattern)) => self.classify(text, pattern),
            _ => Some(Algorithm::Naive),
        }
    }
}

/// Default policy, calibrated on empirical timings.
///
/// Rules, first match wins:
///
/// 1. very short patterns: naive (no preprocessing)
/// 2. pattern longer than text: Rabin-Karp (fails fastest)
/// 3. binary text: Rabin-Karp
/// 4. single distinct symbol: KMP
/// 5. long text: Boyer-Moore
/// 6. self-overlapping pattern: KMP
/// 7. long pattern: Boyer-Moore
/// 8. otherwise: the GoCrazy hybrid
#[derive(Debug, Clone, Default)]
pub struct AdaptivePolicy {
    thresholds: PolicyThresholds,
}

impl AdaptivePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: PolicyThresholds) -> Self {
        Self { thresholds }
    }
}

impl<S: Symbol> ClassificationPolicy<S> for AdaptivePolicy {
    fn classify(&self, text: &[S], pattern: &[S]) -> Option<Algorithm> {
        let t = &self.thresholds;
        let n = text.len();
        let m = pattern.len();

        let choice = if m <= t.short_pattern_max {
            Algorithm::Naive
        } else if m > n {
            Algorithm::RabinKarp
        } else if is_binary(text, t.binary_sample, t.binary_ratio) {
            Algorithm::RabinKarp
        } else if unique_symbol_count(pattern) == 1 {
            Algorithm::Kmp
        } else if n > t.long_text {
            Algorithm::BoyerMoore
        } else if repeat_score(pattern) > t.repeat_score {
            Algorithm::Kmp
        } else if m > t.long_pattern {
            Algorithm::BoyerMoore
        } else {
            Algorithm::GoCrazy
        };

        tracing::trace!(algorithm = %choice, n, m, "adaptive policy");
        Some(choice)
    }

    fn description(&self) -> &'static str {
        "Adaptive strategy based on empirical test results: Naive for short, \
         KMP/RK for repetitive, BM for long patterns, GoCrazy for mixed cases."
    }
}

/// Minimal illustrative policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ExamplePolicy;

/// First symbol occurs at least three times among the first five
fn has_repeating_prefix<S: Symbol>(pattern: &[S]) -> bool {
    if pattern.len() < 2 {
        return false;
    }
    let first = pattern[0];
    pattern.iter().take(5).filter(|&&s| s == first).count() >= 3
}

impl<S: Symbol> ClassificationPolicy<S> for ExamplePolicy {
    fn classify(&self, text: &[S], pattern: &[S]) -> Option<Algorithm> {
        let n = text.len();
        let m = pattern.len();

        let choice = if m <= 3 {
            Algorithm::Naive
        } else if has_repeating_prefix(pattern) {
            Algorithm::Kmp
        } else if m > 10 && n > 1000 {
            Algorithm::RabinKarp
        } else {
            Algorithm::Naive
        };
        Some(choice)
    }

    fn description(&self) -> &'static str {
        "Example strategy: Choose based on pattern length and characteristics"
    }
}

/// Never recommends anything, forcing callers to run every matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferPolicy;

impl<S: Symbol> ClassificationPolicy<S> for DeferPolicy {
    fn classify(&self, _text: &[S], _pattern: &[S]) -> Option<Algorithm> {
        None
    }

    fn description(&self) -> &'static str {
        "Defers every decision: all matchers run"
    }
}

/// Names a policy implementation, e.g. in a config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Adaptive,
    Example,
    Defer,
}

impl PolicyKind {
    /// Build the policy; `thresholds` only affects the adaptive policy
    pub fn into_policy<S: Symbol>(
        self,
        thresholds: PolicyThresholds,
    ) -> Box<dyn ClassificationPolicy<S>> {
        match self {
            PolicyKind::Adaptive => Box::new(AdaptivePolicy::with_thresholds(thresholds)),
            PolicyKind::Example => Box::new(ExamplePolicy),
            PolicyKind::Defer => Box::new(DeferPolicy),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adaptive" | "default" => Ok(PolicyKind::Adaptive),
            "example" => Ok(PolicyKind::Example),
            "defer" | "none" => Ok(PolicyKind::Defer),
            _ => Err(Error::Config(format!("unknown policy: {s:?}"))),
        }
    }
}
