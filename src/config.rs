//! Search configuration.
//!
//! Load settings from TOML to fix the random seed, the import threshold and
//! the 2-opt pass cap without code changes.
//!
//! # Examples
//!
//! ```
//! use geo_tsp::config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     random_seed = 42
//!     min_population = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.min_population, 1_000_000);
//! assert_eq!(config.max_passes, 10_000);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use geo_tsp::config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::import::ImportFilter;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_min_population() -> u64 {
    500_000
}

fn default_max_passes() -> usize {
    10_000
}

/// Search driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Random seed for reproducible runs; `None` seeds from the OS.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Cities must have strictly more inhabitants than this to be imported.
    #[serde(default = "default_min_population")]
    pub min_population: u64,

    /// Maximum 2-opt passes per tick.
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            min_population: default_min_population(),
            max_passes: default_max_passes(),
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
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

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the import population threshold.
    pub fn with_min_population(mut self, min_population: u64) -> Self {
        self.min_population = min_population;
        self
    }

    /// Sets the 2-opt pass cap.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Rejects settings the driver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passes == 0 {
            return Err(ConfigError::Invalid(
                "max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Import filter built from `min_population`.
    pub fn import_filter(&self) -> ImportFilter {
        ImportFilter::new(self.min_population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.random_seed, None);
        assert_eq!(config.min_population, 500_000);
        assert_eq!(config.max_passes, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SearchConfig::from_toml_str("").expect("empty is valid");
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = SearchConfig::from_toml_str(
            r#"
            random_seed = 7
            min_population = 0
            max_passes = 50
            "#,
        )
        .expect("valid");
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.min_population, 0);
        assert_eq!(config.max_passes, 50);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SearchConfig::from_toml_str("max_passes = \"many\"").expect_err("bad type");
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_validate_zero_passes() {
        let config = SearchConfig::new().with_max_passes(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::load("does/not/exist.toml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::new()
            .with_random_seed(3)
            .with_min_population(10)
            .with_max_passes(5);
        assert_eq!(config.random_seed, Some(3));
        assert_eq!(config.import_filter().min_population(), 10);
        assert_eq!(config.max_passes, 5);
    }
}
