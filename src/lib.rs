//! # strmatch - exact substring search with adaptive algorithm selection
//!
//! Four classical matchers report every (possibly overlapping) occurrence of
//! a pattern in a text, and a selection layer predicts which of them will be
//! fastest for a given input without running them all.
//!
//! ## Architecture
//!
//! - [`matcher`] - naive, Knuth-Morris-Pratt, Rabin-Karp and Boyer-Moore
//! - [`analysis`] - LPS tables and input features (alphabet size, binary
//!   ratio, repeat score)
//! - [`select`] - the GoCrazy hybrid dispatcher, pre-analysis policies and
//!   the matcher registry
//! - [`config`] - dispatch and policy thresholds (JSON)
//!
//! ## Quick Start
//!
//! ```
//! use strmatch::matcher::{Algorithm, Matcher};
//! use strmatch::select::{AdaptivePolicy, ClassificationPolicy, GoCrazy, Registry};
//!
//! let text = b"abracadabra";
//! let pattern = b"abra";
//!
//! // Let the hybrid pick a matcher
//! let matches = GoCrazy::new().search(&text[..], &pattern[..]);
//! assert_eq!(matches, [0, 7]);
//!
//! // Or ask a policy and run its recommendation from a registry
//! let registry = Registry::<u8>::with_defaults();
//! let algorithm = AdaptivePolicy::new().classify(&text[..], &pattern[..]);
//! assert_eq!(algorithm, Some(Algorithm::GoCrazy));
//!
//! let matcher = registry.resolve(Algorithm::GoCrazy.name()).unwrap();
//! assert_eq!(matcher.search(text, pattern), [0, 7]);
//! ```
//!
//! All matchers agree on every input. An empty pattern matches at every
//! offset `0..=n`; a pattern longer than the text never matches.
//! Preprocessing tables are built per call and never shared, so every
//! function here is safe to call concurrently.

pub mod analysis;
pub mod config;
pub mod error;
pub mod matcher;
pub mod select;
pub mod symbol;

pub use config::Config;
pub use error::{Error, Result};
pub use matcher::{Algorithm, MatchSet, Matcher};
pub use symbol::Symbol;
