//! Sampling on top of the raw generator
//!
//! All samplers are deterministic given the generator state: same seed +
//! same sequence of calls → same samples.
//!
//! # Example
//!
//! ```
//! use beam_random::distributions::DistributionSpec;
//! use beam_random::Acg;
//!
//! let mut rng = Acg::new(42, 100);
//! let spec: DistributionSpec =
//!     serde_json::from_str(r#"{"Uniform": {"low": -1.0, "high": 1.0}}"#).unwrap();
//!
//! let mut sampler = spec.build().unwrap();
//! let x = sampler.sample(&mut rng);
//! assert!((-1.0..1.0).contains(&x));
//! ```

pub mod continuous;
pub mod discrete;
pub mod integer;

pub use continuous::{NegativeExponential, Normal, StandardNormal, TruncatedNormal, Uniform, Weibull};
pub use discrete::Poisson;
pub use integer::{restrict_to_range, RandomInteger, RangeError};

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid distribution parameters
#[derive(Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Parameter '{name}' = {value} exceeds maximum {max}")]
    TooLarge {
        name: &'static str,
        value: f64,
        max: f64,
    },

    #[error("Uniform bounds inverted: low {low} > high {high}")]
    InvertedBounds { low: f64, high: f64 },
}

/// Serializable description of a distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistributionSpec {
    /// Uniform on `[low, high)`
    Uniform { low: f64, high: f64 },

    /// Normal with mean and variance
    Normal { mean: f64, variance: f64 },

    /// Normal truncated at `cutoff` standard deviations
    TruncatedNormal {
        mean: f64,
        variance: f64,
        cutoff: f64,
    },

    /// Exponential with the given mean
    NegativeExponential { mean: f64 },

    /// Weibull with shape `alpha` and scale parameter `beta`
    Weibull { alpha: f64, beta: f64 },

    /// Poisson event count with the given mean
    Poisson { mean: f64 },
}

impl DistributionSpec {
    /// Validate parameters and build a ready-to-use sampler
    pub fn build(&self) -> Result<Sampler, DistributionError> {
        Ok(match *self {
            DistributionSpec::Uniform { low, high } => Sampler::Uniform(Uniform::new(low, high)?),
            DistributionSpec::Normal { mean, variance } => {
                Sampler::Normal(Normal::new(mean, variance)?)
            }
            DistributionSpec::TruncatedNormal {
                mean,
                variance,
                cutoff,
            } => Sampler::TruncatedNormal(TruncatedNormal::new(mean, variance, cutoff)?),
            DistributionSpec::NegativeExponential { mean } => {
                Sampler::NegativeExponential(NegativeExponential::new(mean)?)
            }
            DistributionSpec::Weibull { alpha, beta } => {
                Sampler::Weibull(Weibull::new(alpha, beta)?)
            }
            DistributionSpec::Poisson { mean } => Sampler::Poisson(Poisson::new(mean)?),
        })
    }
}

/// A validated sampler built from a [`DistributionSpec`]
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    Uniform(Uniform),
    Normal(Normal),
    TruncatedNormal(TruncatedNormal),
    NegativeExponential(NegativeExponential),
    Weibull(Weibull),
    Poisson(Poisson),
}

impl Sampler {
    /// Draw one value (Poisson counts are returned as `f64`)
    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> f64 {
        match self {
            Sampler::Uniform(d) => d.sample(rng),
            Sampler::Normal(d) => d.sample(rng),
            Sampler::TruncatedNormal(d) => d.sample(rng),
            Sampler::NegativeExponential(d) => d.sample(rng),
            Sampler::Weibull(d) => d.sample(rng),
            Sampler::Poisson(d) => d.sample(rng) as f64,
        }
    }

    /// Drop any deviate cached from before a generator reset
    pub fn clear(&mut self) {
        match self {
            Sampler::Normal(d) => d.clear(),
            Sampler::TruncatedNormal(d) => d.clear(),
            _ => {}
        }
    }
}
