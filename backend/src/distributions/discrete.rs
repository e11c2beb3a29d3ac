//! Discrete distributions

use super::DistributionError;
use crate::rng::RandomSource;

/// Largest supported Poisson mean; `exp(-mean)` underflows not far above this
pub const MAX_POISSON_MEAN: f64 = 700.0;

/// Poisson with the given mean, by the multiplicative method
///
/// Counts uniforms until their running product falls below `exp(-mean)`.
/// Cost grows linearly with the mean, which is fine for the event counts
/// drawn per tracking step.
///
/// # Example
/// ```
/// use beam_random::{Acg, Poisson};
///
/// let mut rng = Acg::new(8, 100);
/// let poisson = Poisson::new(3.0).unwrap();
/// let n = 20_000;
/// let mean = (0..n).map(|_| poisson.sample(&mut rng) as f64).sum::<f64>() / n as f64;
/// assert!((mean - 3.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    mean: f64,
    bound: f64,
}

impl Poisson {
    pub fn new(mean: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::NonFinite { name: "mean", value: mean });
        }
        if mean < 0.0 {
            return Err(DistributionError::Negative { name: "mean", value: mean });
        }
        if mean > MAX_POISSON_MEAN {
            return Err(DistributionError::TooLarge {
                name: "mean",
                value: mean,
                max: MAX_POISSON_MEAN,
            });
        }
        Ok(Self {
            mean,
            bound: (-mean).exp(),
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u64 {
        let mut count = 0u64;
        let mut product = 1.0;
        while product >= self.bound {
            count += 1;
            product *= rng.next_f64();
        }
        count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Acg;

    #[test]
    fn test_zero_mean_always_zero() {
        let mut rng = Acg::new(2, 10);
        let poisson = Poisson::new(0.0).unwrap();
        for _ in 0..100 {
            assert_eq!(poisson.sample(&mut rng), 0);
        }
    }

    #[test]
    fn test_rejects_bad_means() {
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
        assert!(matches!(
            Poisson::new(1e6),
            Err(DistributionError::TooLarge { .. })
        ));
        assert!(Poisson::new(MAX_POISSON_MEAN).is_ok());
    }
}
