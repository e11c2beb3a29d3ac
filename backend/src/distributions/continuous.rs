//! Continuous distributions used by scattering and error-injection code
//!
//! Each sampler holds only its parameters (and, for the normal family, one
//! cached deviate) and draws from a caller-supplied [`RandomSource`].

use super::DistributionError;
use crate::rng::RandomSource;

fn finite(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, DistributionError> {
    if finite(name, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::Negative { name, value })
    }
}

// ============================================================================
// Uniform
// ============================================================================

/// Uniform on `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    pub fn new(low: f64, high: f64) -> Result<Self, DistributionError> {
        let low = finite("low", low)?;
        let high = finite("high", high)?;
        if low > high {
            return Err(DistributionError::InvertedBounds { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        self.low + (self.high - self.low) * rng.next_f64()
    }
}

// ============================================================================
// Normal
// ============================================================================

/// Standard normal deviates by Marsaglia's polar method
///
/// Each accepted point yields two independent deviates; the second is kept
/// for the next call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardNormal {
    cached: Option<f64>,
}

impl StandardNormal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with a previously cached deviate (see `RandomStream::restore`)
    pub fn with_cached(cached: Option<f64>) -> Self {
        Self { cached }
    }

    pub fn cached(&self) -> Option<f64> {
        self.cached
    }

    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(z) = self.cached.take() {
            return z;
        }
        loop {
            let v1 = 2.0 * rng.next_f64() - 1.0;
            let v2 = 2.0 * rng.next_f64() - 1.0;
            let w = v1 * v1 + v2 * v2;
            // w == 0 would put ln(0) in the numerator
            if w > 0.0 && w <= 1.0 {
                let y = (-2.0 * w.ln() / w).sqrt();
                self.cached = Some(v2 * y);
                return v1 * y;
            }
        }
    }

    /// Drop the cached deviate (call after the generator is reset)
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

/// Normal with the given mean and variance
///
/// # Example
/// ```
/// use beam_random::{Acg, Normal};
///
/// let mut rng = Acg::new(3, 100);
/// let mut normal = Normal::new(5.0, 4.0).unwrap();
/// assert_eq!(normal.std_dev(), 2.0);
///
/// let n = 20_000;
/// let mean = (0..n).map(|_| normal.sample(&mut rng)).sum::<f64>() / n as f64;
/// assert!((mean - 5.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mean: f64,
    variance: f64,
    std_dev: f64,
    source: StandardNormal,
}

impl Normal {
    /// Zero variance is allowed and yields `mean` every time.
    pub fn new(mean: f64, variance: f64) -> Result<Self, DistributionError> {
        let mean = finite("mean", mean)?;
        let variance = non_negative("variance", variance)?;
        Ok(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
            source: StandardNormal::new(),
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.mean + self.std_dev * self.source.sample(rng)
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }
}

/// Normal truncated at `cutoff` standard deviations from the mean
///
/// Out-of-range deviates are rejected and redrawn. A `cutoff` of zero or
/// less disables truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncatedNormal {
    normal: Normal,
    cutoff: f64,
}

impl TruncatedNormal {
    pub fn new(mean: f64, variance: f64, cutoff: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            normal: Normal::new(mean, variance)?,
            cutoff: finite("cutoff", cutoff)?,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let z = if self.cutoff > 0.0 {
            loop {
                let z = self.normal.source.sample(rng);
                if z.abs() <= self.cutoff {
                    break z;
                }
            }
        } else {
            self.normal.source.sample(rng)
        };
        self.normal.mean + self.normal.std_dev * z
    }

    pub fn clear(&mut self) {
        self.normal.clear();
    }
}

// ============================================================================
// Negative exponential
// ============================================================================

/// Exponential with the given mean (mean free path, decay time, ...)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeExponential {
    mean: f64,
}

impl NegativeExponential {
    pub fn new(mean: f64) -> Result<Self, DistributionError> {
        Ok(Self {
            mean: positive("mean", mean)?,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        // 1 - u lies in (0, 1], keeping the log finite
        -self.mean * (1.0 - rng.next_f64()).ln()
    }
}

// ============================================================================
// Weibull
// ============================================================================

/// Weibull with shape `alpha` and scale parameter `beta`
///
/// Sampled as `(beta * -ln(1 - u))^(1 / alpha)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull {
    alpha: f64,
    inv_alpha: f64,
    beta: f64,
}

impl Weibull {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistributionError> {
        let alpha = positive("alpha", alpha)?;
        let beta = positive("beta", beta)?;
        Ok(Self {
            alpha,
            inv_alpha: 1.0 / alpha,
            beta,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        (self.beta * -(1.0 - rng.next_f64()).ln()).powf(self.inv_alpha)
    }
}
