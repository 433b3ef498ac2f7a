//! Pattern and text analysis used to pick a matcher.
//!
//! - [`lps`] - failure function shared with the KMP matcher
//! - [`features`] - classification signals (lengths, alphabet, binary
//!   ratio, repeat score)

pub mod features;
pub mod lps;

pub use features::{Features, binary_ratio, is_binary, repeat_score, unique_symbol_count};
