//! Sweep configuration.
//!
//! Load sweep parameters from TOML or YAML files to control the board
//! size, the beam widths under test and the repetition counts without
//! code changes.
//!
//! # Examples
//!
//! ```
//! use queenbeam_bench::SweepConfig;
//!
//! let config = SweepConfig::from_toml_str(r#"
//!     board_size = 8
//!     beam_widths = [1, 10, 50]
//!     run_count = 50
//!     problems_per_run = 100
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 8);
//! assert_eq!(config.attempts_per_width(), 5000);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use queenbeam_bench::SweepConfig;
//!
//! let config = SweepConfig::load("sweep.toml").unwrap_or_default();
//! assert_eq!(config.beam_widths, vec![1, 10, 50]);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

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

/// Parameters for one beam-width sweep.
///
/// Per beam width, the search runs `run_count * problems_per_run` times;
/// the split mirrors how results are usually reported (an average success
/// count per run of `problems_per_run` problems).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepConfig {
    /// Number of queens (and board side length).
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Beam widths to test, in sweep order.
    #[serde(default = "default_beam_widths")]
    pub beam_widths: Vec<usize>,

    /// Number of measurement runs per beam width.
    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Number of search problems per run.
    #[serde(default = "default_problems_per_run")]
    pub problems_per_run: usize,

    /// Random seed for reproducible sweeps.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_board_size() -> usize {
    8
}

fn default_beam_widths() -> Vec<usize> {
    vec![1, 10, 50]
}

fn default_run_count() -> usize {
    50
}

fn default_problems_per_run() -> usize {
    100
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepConfig {
    /// Creates the default configuration: 8 queens, widths 1/10/50,
    /// 50 runs of 100 problems each.
    pub fn new() -> Self {
        SweepConfig {
            board_size: default_board_size(),
            beam_widths: default_beam_widths(),
            run_count: default_run_count(),
            problems_per_run: default_problems_per_run(),
            random_seed: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
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
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the beam widths to sweep.
    pub fn with_beam_widths(mut self, beam_widths: Vec<usize>) -> Self {
        self.beam_widths = beam_widths;
        self
    }

    /// Sets the number of runs per beam width.
    pub fn with_run_count(mut self, run_count: usize) -> Self {
        self.run_count = run_count;
        self
    }

    /// Sets the number of problems per run.
    pub fn with_problems_per_run(mut self, problems_per_run: usize) -> Self {
        self.problems_per_run = problems_per_run;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Total search invocations per beam width.
    pub fn attempts_per_width(&self) -> usize {
        self.run_count * self.problems_per_run
    }

    /// Checks the configuration for degenerate values.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a zero board size, an empty width list, a
    /// zero width, or zero repetition counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Invalid(
                "board_size must be at least 1".to_string(),
            ));
        }
        if self.beam_widths.is_empty() {
            return Err(ConfigError::Invalid(
                "beam_widths must not be empty".to_string(),
            ));
        }
        if self.beam_widths.contains(&0) {
            return Err(ConfigError::Invalid(
                "beam widths must be at least 1".to_string(),
            ));
        }
        if self.run_count == 0 || self.problems_per_run == 0 {
            return Err(ConfigError::Invalid(
                "run_count and problems_per_run must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
