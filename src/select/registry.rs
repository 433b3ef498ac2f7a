//! Explicit name-to-matcher registry.
//!
//! Harnesses build a registry at startup and look matchers up by the names
//! policies return. Nothing registers itself implicitly.

use super::hybrid::GoCrazy;
use super::policy::ClassificationPolicy;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::matcher::{Algorithm, BoyerMoore, Kmp, MatchSet, Matcher, Naive, RabinKarp};
use crate::symbol::Symbol;
use rayon::prelude::*;

/// Result of [`Registry::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The policy named one algorithm and only it ran
    Selected {
        algorithm: Algorithm,
        matches: MatchSet,
    },
    /// The policy deferred; every registered matcher ran, in registration order
    All(Vec<(Algorithm, MatchSet)>),
}

impl Outcome {
    /// Matches of the selected algorithm, or of the first one when all ran
    pub fn matches(&self) -> Option<&MatchSet> {
        match self {
            Outcome::Selected { matches, .. } => Some(matches),
            Outcome::All(results) => results.first().map(|(_, m)| m),
        }
    }
}

pub struct Registry<S: Symbol> {
    matchers: Vec<Box<dyn Matcher<S>>>,
}

impl<S: Symbol> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Registry<S> {
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Registry holding every built-in matcher with default settings
    pub fn with_defaults() -> Self {
        Self::with_config(&Config::default())
    }

    /// Registry holding every built-in matcher, the hybrid using the
    /// configured dispatch thresholds
    pub fn with_config(config: &Config) -> Self {
        let mut registry = Self::new();
        registry
            .register(Naive)
            .register(Kmp)
            .register(RabinKarp)
            .register(BoyerMoore)
            .register(GoCrazy::with_thresholds(config.dispatch.clone()));
        registry
    }

    /// Add a matcher, replacing any earlier one for the same algorithm
    pub fn register<M: Matcher<S> + 'static>(&mut self, matcher: M) -> &mut Self {
        let algorithm = matcher.algorithm();
        let boxed: Box<dyn Matcher<S>> = Box::new(matcher);

        match self.matchers.iter().position(|m| m.algorithm() == algorithm) {
            Some(idx) => {
                tracing::debug!(%algorithm, "replacing registered matcher");
                self.matchers[idx] = boxed;
            }
            None => {
                tracing::debug!(%algorithm, "registered matcher");
                self.matchers.push(boxed);
            }
        }
        self
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&dyn Matcher<S>> {
        self.matchers
            .iter()
            .find(|m| m.algorithm() == algorithm)
            .map(|m| &**m)
    }

    /// Look up a matcher by name (see [`Algorithm::from_str`](std::str::FromStr))
    pub fn resolve(&self, name: &str) -> Result<&dyn Matcher<S>> {
        let algorithm: Algorithm = name.parse()?;
        tracing::debug!(name, %algorithm, "resolving matcher");
        self.get(algorithm).ok_or(Error::NotRegistered(algorithm))
    }

    /// Registered algorithms in registration order
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.matchers.iter().map(|m| m.algorithm()).collect()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Ask `policy` for a recommendation and run it, or run everything if
    /// the policy defers
    pub fn run(
        &self,
        policy: &dyn ClassificationPolicy<S>,
        text: &[S],
        pattern: &[S],
    ) -> Result<Outcome> {
        match policy.classify(text, pattern) {
            Some(algorithm) => {
                let matcher = self.get(algorithm).ok_or(Error::NotRegistered(algorithm))?;
                Ok(Outcome::Selected {
                    algorithm,
                    matches: matcher.search(text, pattern),
                })
            }
            None => {
                tracing::debug!(matchers = self.len(), "policy deferred, running all");
                Ok(Outcome::All(self.run_all(text, pattern)))
            }
        }
    }

    pub fn run_all(&self, text: &[S], pattern: &[S]) -> Vec<(Algorithm, MatchSet)> {
        self.matchers
            .iter()
            .map(|m| (m.algorithm(), m.search(text, pattern)))
            .collect()
    }

    /// Like [`run_all`](Self::run_all), one matcher per rayon task
    pub fn run_all_parallel(&self, text: &[S], pattern: &[S]) -> Vec<(Algorithm, MatchSet)> {
        self.matchers
            .par_iter()
            .map(|m| (m.algorithm(), m.search(text, pattern)))
            .collect()
    }

    /// Run every matcher and require identical results
    pub fn cross_check(&self, text: &[S], pattern: &[S]) -> Result<MatchSet> {
        let mut results = self.run_all_parallel(text, pattern).into_iter();
        let (_, expected) = results.next().ok_or(Error::EmptyRegistry)?;

        for (algorithm, found) in results {
            if found != expected {
                return Err(Error::Disagreement {
                    algorithm,
                    expected,
                    found,
                });
            }
        }

        Ok(expected)
    }
}
