//! Per-consumer random stream
//!
//! [`RandomStream`] bundles one [`Acg`] with the state the samplers need
//! between calls (the cached normal deviate), and exposes the draws that
//! scattering, error-injection and distribution code use. Each consumer owns
//! its own stream; there is no process-wide generator.

use crate::config::GeneratorConfig;
use crate::distributions::{
    DistributionError, DistributionSpec, NegativeExponential, Poisson, RandomInteger, RangeError,
    StandardNormal, TruncatedNormal, Uniform, Weibull,
};
use crate::rng::{Acg, AcgSnapshot, CheckpointError, RandomSource};
use serde::{Deserialize, Serialize};

/// Stream state for checkpointing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSnapshot {
    pub generator: AcgSnapshot,

    /// Second deviate of the last polar-method pair, if unused
    pub cached_normal: Option<f64>,
}

/// A seeded generator plus convenience draws
///
/// # Example
/// ```
/// use beam_random::RandomStream;
///
/// let mut stream = RandomStream::new(12345, 100);
/// let phi = stream.uniform(-std::f64::consts::PI, std::f64::consts::PI).unwrap();
/// let offset = stream.normal_truncated(0.0, 1e-8, 3.0).unwrap();
/// let hits = stream.poisson(2.5).unwrap();
///
/// assert!(phi.abs() <= std::f64::consts::PI);
/// assert!(offset.abs() < 4e-4);
/// let _ = hits;
/// ```
#[derive(Debug, Clone)]
pub struct RandomStream {
    generator: Acg,
    normal: StandardNormal,
}

impl RandomStream {
    pub fn new(seed: u32, min_size: usize) -> Self {
        Self::from_generator(Acg::new(seed, min_size))
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::from_generator(config.build())
    }

    pub fn from_generator(generator: Acg) -> Self {
        Self {
            generator,
            normal: StandardNormal::new(),
        }
    }

    pub fn generator(&self) -> &Acg {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut Acg {
        &mut self.generator
    }

    /// Reseed from the original seed and drop cached sampler state
    pub fn reset(&mut self) {
        self.generator.reset();
        self.normal.clear();
    }

    pub fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    /// Uniform on `[low, high)`
    pub fn uniform(&mut self, low: f64, high: f64) -> Result<f64, DistributionError> {
        Ok(Uniform::new(low, high)?.sample(&mut self.generator))
    }

    /// Normal with the given mean and variance
    pub fn normal(&mut self, mean: f64, variance: f64) -> Result<f64, DistributionError> {
        self.normal_truncated(mean, variance, 0.0)
    }

    /// Normal truncated at `cutoff` standard deviations (`cutoff <= 0`: none)
    pub fn normal_truncated(
        &mut self,
        mean: f64,
        variance: f64,
        cutoff: f64,
    ) -> Result<f64, DistributionError> {
        // Validates the parameters; sampling uses the stream's own cache.
        let dist = TruncatedNormal::new(mean, variance, cutoff)?;
        let z = loop {
            let z = self.normal.sample(&mut self.generator);
            if dist.cutoff() <= 0.0 || z.abs() <= dist.cutoff() {
                break z;
            }
        };
        Ok(mean + variance.sqrt() * z)
    }

    /// Exponential with the given mean
    pub fn exponential(&mut self, mean: f64) -> Result<f64, DistributionError> {
        Ok(NegativeExponential::new(mean)?.sample(&mut self.generator))
    }

    pub fn weibull(&mut self, alpha: f64, beta: f64) -> Result<f64, DistributionError> {
        Ok(Weibull::new(alpha, beta)?.sample(&mut self.generator))
    }

    pub fn poisson(&mut self, mean: f64) -> Result<u64, DistributionError> {
        Ok(Poisson::new(mean)?.sample(&mut self.generator))
    }

    /// Integer in `[low, high]`
    pub fn integer(&mut self, low: i64, high: i64) -> Result<i64, RangeError> {
        Ok(RandomInteger::new(low, high, &mut self.generator)?.as_i64())
    }

    /// Draw from a described distribution
    pub fn sample(&mut self, spec: &DistributionSpec) -> Result<f64, DistributionError> {
        match *spec {
            DistributionSpec::Normal { mean, variance } => self.normal(mean, variance),
            DistributionSpec::TruncatedNormal {
                mean,
                variance,
                cutoff,
            } => self.normal_truncated(mean, variance, cutoff),
            _ => Ok(spec.build()?.sample(&mut self.generator)),
        }
    }

    pub fn snapshot(&self) -> StreamSnapshot {
        StreamSnapshot {
            generator: self.generator.snapshot(),
            cached_normal: self.normal.cached(),
        }
    }

    pub fn restore(snapshot: StreamSnapshot) -> Result<Self, CheckpointError> {
        Ok(Self {
            generator: Acg::restore(snapshot.generator)?,
            normal: StandardNormal::with_cached(snapshot.cached_normal),
        })
    }
}

impl RandomSource for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    fn reset(&mut self) {
        RandomStream::reset(self)
    }
}
