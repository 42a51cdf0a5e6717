//! Configuration system for MeldForge.
//!
//! Load solver configuration from TOML or YAML files to pick the optimizer
//! backend, the numeric tolerances and the ruleset without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use meldforge_config::{MilpBackend, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     backend = "microlp"
//!     time_limit_seconds = 10
//!
//!     [ruleset]
//!     colours = 5
//!     jokers = 4
//! "#).unwrap();
//!
//! assert_eq!(config.backend, MilpBackend::Microlp);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! assert_eq!(config.ruleset.colours, 5);
//! assert_eq!(config.ruleset.numbers, 13);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use meldforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("meldforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use meldforge_core::RuleSetParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when none is configured.
pub const DEFAULT_INTEGRALITY_TOLERANCE: f64 = 1e-3;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Optimizer backend.
    #[serde(default)]
    pub backend: MilpBackend,

    /// Largest accepted distance between an optimizer value and the integer
    /// it rounds to.
    #[serde(default = "default_integrality_tolerance")]
    pub integrality_tolerance: f64,

    /// Time limit handed to backends that support one.
    #[serde(default)]
    pub time_limit_seconds: Option<u64>,

    /// Standard ruleset parameters.
    #[serde(default)]
    pub ruleset: RuleSetParams,
}

fn default_integrality_tolerance() -> f64 {
    DEFAULT_INTEGRALITY_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: MilpBackend::default(),
            integrality_tolerance: DEFAULT_INTEGRALITY_TOLERANCE,
            time_limit_seconds: None,
            ruleset: RuleSetParams::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the optimizer backend.
    pub fn with_backend(mut self, backend: MilpBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the standard ruleset parameters.
    pub fn with_ruleset(mut self, ruleset: RuleSetParams) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Sets the optimizer time limit.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Sets the integrality tolerance.
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Returns the time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_seconds
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    /// Checks values serde cannot constrain on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.integrality_tolerance;
        if !(tolerance > 0.0 && tolerance < 0.5) {
            return Err(ConfigError::Invalid(format!(
                "integrality_tolerance must be in (0, 0.5), got {tolerance}"
            )));
        }
        self.ruleset
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Mixed-integer programming backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilpBackend {
    /// Pure Rust branch-and-bound solver.
    #[default]
    Microlp,

    /// HiGHS, requires the `highs` feature of the solver crate.
    Highs,

    /// COIN-OR CBC, requires the `coin_cbc` feature of the solver crate.
    CoinCbc,
}

impl MilpBackend {
    /// Preference order when picking a backend automatically.
    pub const PREFERENCE: [MilpBackend; 3] =
        [MilpBackend::Highs, MilpBackend::CoinCbc, MilpBackend::Microlp];

    pub fn name(self) -> &'static str {
        match self {
            MilpBackend::Microlp => "microlp",
            MilpBackend::Highs => "highs",
            MilpBackend::CoinCbc => "coin_cbc",
        }
    }
}

impl fmt::Display for MilpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
