//! Deterministic random number generation
//!
//! Uses the ACG algorithm (LCG output permuted under control of an additive
//! congruential generator) as the single source of randomness.
//! CRITICAL: All sampling in the toolkit MUST go through a [`RandomSource`].

pub mod acg;
pub mod checkpoint;
pub mod tables;

pub use acg::Acg;
pub use checkpoint::{AcgSnapshot, CheckpointError};

// Float draws below build an f64 from exactly two 32-bit words.
const _: () = assert!(std::mem::size_of::<f64>() == 2 * std::mem::size_of::<u32>());
const _: () = assert!(std::mem::size_of::<f32>() == std::mem::size_of::<u32>());

/// Mantissa bits of an IEEE-754 single
const F32_MANTISSA_MASK: u32 = 0x007f_ffff;

/// Mantissa bits held in the high word of an IEEE-754 double
const F64_HIGH_MANTISSA_MASK: u32 = 0x000f_ffff;

/// A seeded source of uniformly distributed 32-bit integers
///
/// Implementors provide the raw stream; floating-point draws are derived
/// from it by filling the mantissa of a number in `[1, 2)` and subtracting one.
pub trait RandomSource {
    /// Advance one step and return 32 random bits
    fn next_u32(&mut self) -> u32;

    /// Rewind to the state right after construction
    fn reset(&mut self);

    /// Uniform `f32` in `[0.0, 1.0)`, consuming one draw
    ///
    /// # Example
    /// ```
    /// use beam_random::rng::{Acg, RandomSource};
    ///
    /// let mut rng = Acg::new(1, 100);
    /// let x = rng.next_f32();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    fn next_f32(&mut self) -> f32 {
        let bits = 1.0f32.to_bits() | (self.next_u32() & F32_MANTISSA_MASK);
        f32::from_bits(bits) - 1.0
    }

    /// Uniform `f64` in `[0.0, 1.0)`, consuming two draws
    ///
    /// The first draw fills the low word of the mantissa, the second the
    /// top 20 mantissa bits.
    ///
    /// # Example
    /// ```
    /// use beam_random::rng::{Acg, RandomSource};
    ///
    /// let mut rng = Acg::new(1, 100);
    /// let x = rng.next_f64();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    fn next_f64(&mut self) -> f64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32() & F64_HIGH_MANTISSA_MASK);
        let bits = 1.0f64.to_bits() | (high << 32) | low;
        f64::from_bits(bits) - 1.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
