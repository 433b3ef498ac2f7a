//! Tunable thresholds for the hybrid dispatcher and the adaptive policy.
//!
//! Defaults are the empirically chosen constants the selection logic was
//! calibrated with. Changing them only moves work between matchers; every
//! matcher returns the same matches, so no value can break correctness.

use crate::error::Error;
use crate::select::policy::PolicyKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Decision thresholds for the hybrid dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchThresholds {
    /// Texts strictly longer than this go to Boyer-Moore...
    pub long_text: usize,
    /// ...when the pattern is strictly longer than this
    pub long_text_min_pattern: usize,
    /// Patterns up to this length are checked for repetition
    pub short_pattern_max: usize,
    /// Repeat scores strictly above this count as highly repetitive
    pub repeat_score: f64,
    /// Binary ratios strictly above this route to Rabin-Karp
    pub binary_ratio: f64,
    /// Leading text symbols sampled for the binary ratio
    pub binary_sample: usize,
}

impl Default for DispatchThresholds {
    fn default() -> Self {
        Self {
            long_text: 500,
            long_text_min_pattern: 2,
            short_pattern_max: 10,
            repeat_score: 0.5,
            binary_ratio: 0.1,
            binary_sample: 1000,
        }
    }
}

/// Decision thresholds for the adaptive pre-analysis policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyThresholds {
    /// Patterns up to this length use the naive matcher
    pub short_pattern_max: usize,
    /// Texts strictly longer than this use Boyer-Moore
    pub long_text: usize,
    /// Repeat scores strictly above this use KMP
    pub repeat_score: f64,
    /// Patterns strictly longer than this use Boyer-Moore
    pub long_pattern: usize,
    pub binary_ratio: f64,
    pub binary_sample: usize,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            short_pattern_max: 2,
            long_text: 5000,
            repeat_score: 0.3,
            long_pattern: 10,
            binary_ratio: 0.1,
            binary_sample: 1000,
        }
    }
}

fn check_ratio(name: &str, value: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::Config(format!("{name} must be within [0, 1], got {value}")))
    }
}

impl DispatchThresholds {
    pub fn validate(&self) -> Result<(), Error> {
        check_ratio("dispatch.repeat_score", self.repeat_score)?;
        check_ratio("dispatch.binary_ratio", self.binary_ratio)
    }
}

impl PolicyThresholds {
    pub fn validate(&self) -> Result<(), Error> {
        check_ratio("policy.repeat_score", self.repeat_score)?;
        check_ratio("policy.binary_ratio", self.binary_ratio)
    }
}

/// Selection configuration, usually read from a JSON file.
///
/// Every field is optional in the file; missing values keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dispatch: DispatchThresholds,
    pub policy: PolicyThresholds,
    pub policy_kind: PolicyKind,
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(content).context("Failed to parse selection config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, or return the defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.dispatch.validate()?;
        self.policy.validate()
    }
}
