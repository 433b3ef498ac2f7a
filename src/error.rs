use crate::matcher::{Algorithm, MatchSet};
use thiserror::Error;

/// Errors raised at the registry, configuration and name-resolution seams.
///
/// The matchers themselves never fail on well-formed input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown algorithm name: {0:?}")]
    UnknownAlgorithm(String),

    #[error("algorithm {0} is not registered")]
    NotRegistered(Algorithm),

    #[error("no matchers registered")]
    EmptyRegistry,

    #[error("{algorithm} returned {found:?}, expected {expected:?}")]
    Disagreement {
        algorithm: Algorithm,
        expected: MatchSet,
        found: MatchSet,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
