//! Generator configuration
//!
//! Loaded from JSON by the harness binary or embedded in larger simulation
//! configs. Missing fields take their defaults.

use crate::rng::Acg;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Table size requested by the scattering and tracking code
pub const DEFAULT_MIN_SIZE: usize = 100;

/// Errors while loading a [`GeneratorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Seed and minimum state size for one generator
///
/// # Example
/// ```
/// use beam_random::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.min_size, 100);
///
/// let rng = config.build();
/// assert_eq!(rng.state_size(), 98);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed passed to the generator
    pub seed: u32,

    /// Minimum additive state size; rounded up to a supported table size
    pub min_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl GeneratorConfig {
    pub fn new(seed: u32, min_size: usize) -> Self {
        Self { seed, min_size }
    }

    /// Parse from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Construct the configured generator
    pub fn build(&self) -> Acg {
        Acg::new(self.seed, self.min_size)
    }
}
