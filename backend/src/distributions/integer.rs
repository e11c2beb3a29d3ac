//! Range-restricted integer draws
//!
//! [`RandomInteger`] wraps any [`RandomSource`] and maps raw 32-bit draws
//! into an inclusive range with `raw % (high - low + 1) + low`. A default
//! range is stored, and every draw can override it for one shot.
//!
//! Ranges are checked at the call boundary: an inverted range, or one the
//! 32-bit draw (or the requested output type) cannot cover, is an error and
//! is never clamped or swapped.

use crate::rng::RandomSource;
use thiserror::Error;

/// Number of distinct values a single raw draw can produce
const RAW_SPAN: u64 = 1 << 32;

/// Errors for invalid integer ranges
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range: high {high} is below low {low}")]
    Inverted { low: i64, high: i64 },

    #[error("Range [{low}, {high}] is wider than a 32-bit draw can cover")]
    SpanTooWide { low: i64, high: i64 },

    #[error("Range [{low}, {high}] does not fit in {target}")]
    ExceedsTarget {
        low: i64,
        high: i64,
        target: &'static str,
    },
}

/// Number of values in `[low, high]`, if a raw draw can cover them
fn checked_span(low: i64, high: i64) -> Result<u64, RangeError> {
    if high < low {
        return Err(RangeError::Inverted { low, high });
    }
    let span = (i128::from(high) - i128::from(low) + 1) as u128;
    if span > u128::from(RAW_SPAN) {
        return Err(RangeError::SpanTooWide { low, high });
    }
    Ok(span as u64)
}

/// Map one raw draw into `[low, high]`
///
/// # Example
/// ```
/// use beam_random::distributions::restrict_to_range;
///
/// assert_eq!(restrict_to_range(25, 10, 20), Ok(13));
/// assert!(restrict_to_range(25, 20, 10).is_err());
/// ```
pub fn restrict_to_range(raw: u32, low: i64, high: i64) -> Result<i64, RangeError> {
    let span = checked_span(low, high)?;
    Ok(low + (u64::from(raw) % span) as i64)
}

/// Integer adaptor over a random source
///
/// # Example
/// ```
/// use beam_random::{Acg, RandomInteger};
///
/// let mut acg = Acg::new(1, 100);
/// let mut dice = RandomInteger::new(1, 6, &mut acg).unwrap();
///
/// for _ in 0..100 {
///     let roll = dice.as_i64();
///     assert!((1..=6).contains(&roll));
/// }
/// assert!(dice.as_i64_in(6, 1).is_err());
/// ```
#[derive(Debug)]
pub struct RandomInteger<R> {
    generator: R,
    low: i64,
    high: i64,
}

impl<R: RandomSource> RandomInteger<R> {
    /// Adaptor drawing from `[low, high]` by default
    pub fn new(low: i64, high: i64, generator: R) -> Result<Self, RangeError> {
        checked_span(low, high)?;
        Ok(Self {
            generator,
            low,
            high,
        })
    }

    /// Adaptor drawing from `[0, high]` by default
    pub fn with_high(high: i64, generator: R) -> Result<Self, RangeError> {
        Self::new(0, high, generator)
    }

    /// Adaptor drawing from `[0, 1]` by default
    pub fn unit(generator: R) -> Self {
        Self {
            generator,
            low: 0,
            high: 1,
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn generator(&self) -> &R {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut R {
        &mut self.generator
    }

    /// Replace the generator, returning the previous one
    pub fn replace_generator(&mut self, generator: R) -> R {
        std::mem::replace(&mut self.generator, generator)
    }

    /// Change the default lower bound, returning the previous one
    pub fn set_low(&mut self, low: i64) -> Result<i64, RangeError> {
        checked_span(low, self.high)?;
        Ok(std::mem::replace(&mut self.low, low))
    }

    /// Change the default upper bound, returning the previous one
    pub fn set_high(&mut self, high: i64) -> Result<i64, RangeError> {
        checked_span(self.low, high)?;
        Ok(std::mem::replace(&mut self.high, high))
    }

    /// Draw from the default range
    pub fn as_i64(&mut self) -> i64 {
        // Default range was validated when it was stored.
        let span = (self.high - self.low) as u64 + 1;
        self.low + (u64::from(self.generator.next_u32()) % span) as i64
    }

    /// Draw from `[low(), high]` for this call only
    pub fn as_i64_to(&mut self, high: i64) -> Result<i64, RangeError> {
        self.as_i64_in(self.low, high)
    }

    /// Draw from `[low, high]` for this call only
    ///
    /// The range is checked before the generator advances.
    pub fn as_i64_in(&mut self, low: i64, high: i64) -> Result<i64, RangeError> {
        let span = checked_span(low, high)?;
        Ok(low + (u64::from(self.generator.next_u32()) % span) as i64)
    }

    /// Draw from the default range as an `i32`
    pub fn as_i32(&mut self) -> Result<i32, RangeError> {
        let (low, high) = (self.low, self.high);
        let exceeds = RangeError::ExceedsTarget {
            low,
            high,
            target: "i32",
        };
        if low < i64::from(i32::MIN) || high > i64::from(i32::MAX) {
            return Err(exceeds);
        }
        i32::try_from(self.as_i64()).map_err(|_| exceeds)
    }

    /// Give back the wrapped generator
    pub fn into_inner(self) -> R {
        self.generator
    }
}
