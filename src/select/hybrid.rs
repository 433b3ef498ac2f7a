//! GoCrazy: a fixed decision tree that routes each search to the matcher
//! expected to be fastest for the input.
//!
//! The decision only affects speed. Every branch delegates to a matcher that
//! reports exactly the same matches, so callers see identical results no
//! matter which branch fires.

use crate::analysis::{is_binary, repeat_score, unique_symbol_count};
use crate::config::DispatchThresholds;
use crate::matcher::{Algorithm, MatchSet, Matcher, boyer_moore, kmp, naive, rabin_karp};
use crate::symbol::Symbol;
use serde::Serialize;

/// Which rule of the decision tree fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecisionReason {
    /// Every offset matches; no scan needed
    EmptyPattern,
    /// Single-symbol pattern, scan overhead dominates
    SingleSymbol,
    /// Long text, Boyer-Moore skips pay for its preprocessing
    LongText,
    /// Short, highly self-overlapping pattern of one repeated symbol
    RepetitiveUniform,
    /// Short, highly self-overlapping pattern with several symbols
    RepetitiveMixed,
    /// Short pattern without a repetition signal
    ShortPattern,
    /// Text sample looks like binary data
    BinaryText,
    Default,
}

impl DecisionReason {
    /// Every reason in decision-tree order
    pub const ALL: [DecisionReason; 8] = [
        DecisionReason::EmptyPattern,
        DecisionReason::SingleSymbol,
        DecisionReason::LongText,
        DecisionReason::RepetitiveUniform,
        DecisionReason::RepetitiveMixed,
        DecisionReason::ShortPattern,
        DecisionReason::BinaryText,
        DecisionReason::Default,
    ];

    /// Matcher this rule routes to. Never `GoCrazy`.
    pub fn algorithm(self) -> Algorithm {
        match self {
            DecisionReason::EmptyPattern
            | DecisionReason::SingleSymbol
            | DecisionReason::ShortPattern => Algorithm::Naive,
            DecisionReason::RepetitiveUniform => Algorithm::Kmp,
            DecisionReason::BinaryText => Algorithm::RabinKarp,
            DecisionReason::LongText | DecisionReason::RepetitiveMixed | DecisionReason::Default => {
                Algorithm::BoyerMoore
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub algorithm: Algorithm,
    pub reason: DecisionReason,
}

impl From<DecisionReason> for Decision {
    fn from(reason: DecisionReason) -> Self {
        Self {
            algorithm: reason.algorithm(),
            reason,
        }
    }
}

/// Evaluate the decision tree with the default thresholds
pub fn choose<S: Symbol>(text: &[S], pattern: &[S]) -> Decision {
    choose_with(&DispatchThresholds::default(), text, pattern)
}

/// Evaluate the decision tree; the first rule that applies wins.
///
/// Signals are computed lazily, only on the branches that read them.
pub fn choose_with<S: Symbol>(t: &DispatchThresholds, text: &[S], pattern: &[S]) -> Decision {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return DecisionReason::EmptyPattern.into();
    }

    if m == 1 {
        return DecisionReason::SingleSymbol.into();
    }

    if n > t.long_text && m > t.long_text_min_pattern {
        return DecisionReason::LongText.into();
    }

    if m <= t.short_pattern_max {
        // Cheap pre-check before building the LPS table
        let potential_repetition = m > 2 && pattern[0] == pattern[1] && pattern[1] == pattern[2];

        if potential_repetition && repeat_score(pattern) > t.repeat_score {
            return if unique_symbol_count(pattern) == 1 {
                DecisionReason::RepetitiveUniform.into()
            } else {
                DecisionReason::RepetitiveMixed.into()
            };
        }

        return DecisionReason::ShortPattern.into();
    }

    if is_binary(text, t.binary_sample, t.binary_ratio) {
        return DecisionReason::BinaryText.into();
    }

    DecisionReason::Default.into()
}

/// Hybrid matcher that dispatches every call through the decision tree
#[derive(Debug, Clone, Default)]
pub struct GoCrazy {
    thresholds: DispatchThresholds,
}

impl GoCrazy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: DispatchThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DispatchThresholds {
        &self.thresholds
    }

    pub fn choose<S: Symbol>(&self, text: &[S], pattern: &[S]) -> Decision {
        choose_with(&self.thresholds, text, pattern)
    }
}

impl<S: Symbol> Matcher<S> for GoCrazy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::GoCrazy
    }

    fn search(&self, text: &[S], pattern: &[S]) -> MatchSet {
        search_with(&self.thresholds, text, pattern)
    }
}

pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchSet {
    search_with(&DispatchThresholds::default(), text, pattern)
}

pub fn search_with<S: Symbol>(t: &DispatchThresholds, text: &[S], pattern: &[S]) -> MatchSet {
    let decision = choose_with(t, text, pattern);
    tracing::trace!(
        algorithm = %decision.algorithm,
        reason = ?decision.reason,
        text_len = text.len(),
        pattern_len = pattern.len(),
        "hybrid dispatch"
    );

    match decision.reason {
        DecisionReason::EmptyPattern => MatchSet::all_offsets(text.len()),
        DecisionReason::SingleSymbol | DecisionReason::ShortPattern => naive::search(text, pattern),
        DecisionReason::RepetitiveUniform => kmp::search(text, pattern),
        DecisionReason::BinaryText => rabin_karp::search(text, pattern),
        DecisionReason::LongText | DecisionReason::RepetitiveMixed | DecisionReason::Default => {
            boyer_moore::search(text, pattern)
        }
    }
}
