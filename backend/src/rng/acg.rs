//! ACG: additive congruential generator permuting an LCG stream
//!
//! Knuth's Algorithm M with two cooperating generators:
//!
//! - a 32-bit LCG (`x * 66049 + 3907864577`), which is uniform over its full
//!   period but has weak low-order bits and poor independence
//! - a lagged Fibonacci (additive) generator over a table of `state_size`
//!   words, which has a long period and good independence
//!
//! Each draw takes an LCG word from an auxiliary pool, chosen by the top byte
//! of the additive result, and permutes its four bytes with one of 16 byte
//! permutations chosen by four more bits of that result.
//!
//! # Determinism
//!
//! Same seed + same size → same sequence of values, on every platform.

use super::tables::{self, StateTableEntry};
use super::RandomSource;

/// LCG multiplier (251²)
pub const LC_A: u32 = 66049;

/// LCG increment
pub const LC_C: u32 = 3_907_864_577;

#[inline]
fn lcg(x: u32) -> u32 {
    x.wrapping_mul(LC_A).wrapping_add(LC_C)
}

/// Hybrid ACG/LCG generator
///
/// Owns a single buffer of `state_size + aux_size` words: the main additive
/// table followed by the auxiliary scramble pool.
///
/// Not meant to be shared between threads; give each consumer its own
/// instance with a distinct seed.
///
/// # Example
/// ```
/// use beam_random::Acg;
///
/// let mut rng = Acg::new(1, 100);
/// let first = rng.next_u32();
///
/// rng.reset();
/// assert_eq!(rng.next_u32(), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acg {
    /// Seed given at construction (before diversification)
    initial_seed: u32,

    /// Selected row of the state-size table
    entry: StateTableEntry,

    /// Main region `[0, state_size)` then auxiliary region
    buffer: Vec<u32>,

    /// Short-lag cursor into the main region
    j: usize,

    /// Long-lag cursor into the main region
    k: usize,

    /// LCG register refilling the auxiliary pool
    lcg_recurr: u32,
}

impl Acg {
    /// Create a generator with at least `min_size` words of additive state
    ///
    /// The size is rounded up to the next supported table entry, or capped
    /// at the largest one (98 words).
    ///
    /// # Example
    /// ```
    /// use beam_random::Acg;
    ///
    /// let rng = Acg::new(42, 30);
    /// assert_eq!(rng.state_size(), 31);
    /// assert_eq!(rng.aux_size(), 128);
    /// ```
    pub fn new(seed: u32, min_size: usize) -> Self {
        let entry = *tables::select_state_entry(min_size);
        let mut acg = Self {
            initial_seed: seed,
            entry,
            buffer: vec![0; entry.buffer_len()],
            j: 0,
            k: 0,
            lcg_recurr: 0,
        };
        acg.reset();
        acg
    }

    /// Reinitialize from the original seed, reusing the existing buffer
    pub fn reset(&mut self) {
        let mut u = tables::diversify_seed(self.initial_seed);

        // Main region first, then the auxiliary pool, one LCG stream.
        for word in self.buffer.iter_mut() {
            u = lcg(u);
            *word = u;
        }

        let n = self.entry.state_size;
        self.k = u as usize % n;
        self.j = (self.k + n - self.entry.tail_behind()) % n;
        self.lcg_recurr = u;
    }

    /// Advance one step and return 32 random bits
    ///
    /// # Example
    /// ```
    /// use beam_random::Acg;
    ///
    /// let mut a = Acg::new(7, 55);
    /// let mut b = Acg::new(7, 55);
    /// for _ in 0..1000 {
    ///     assert_eq!(a.next_u32(), b.next_u32());
    /// }
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        let n = self.entry.state_size;

        let sum = self.buffer[self.k].wrapping_add(self.buffer[self.j]);
        self.buffer[self.k] = sum;
        self.j = if self.j == 0 { n - 1 } else { self.j - 1 };
        self.k = if self.k == 0 { n - 1 } else { self.k - 1 };

        let slot = n + self.aux_index(sum);
        let aux = self.buffer[slot];
        self.lcg_recurr = lcg(self.lcg_recurr);
        self.buffer[slot] = self.lcg_recurr;

        let perm = tables::permutation_group(sum);
        (perm[0] & aux)
            | (perm[1] & aux.rotate_left(24))
            | (perm[2] & aux.rotate_left(16))
            | (perm[3] & aux.rotate_left(8))
    }

    /// Auxiliary slot addressed by the top byte of an additive result
    #[inline]
    fn aux_index(&self, sum: u32) -> usize {
        (sum >> 24) as usize & (self.entry.aux_size - 1)
    }

    /// Seed passed to [`Acg::new`]
    pub fn seed(&self) -> u32 {
        self.initial_seed
    }

    /// Words in the additive table (long lag)
    pub fn state_size(&self) -> usize {
        self.entry.state_size
    }

    /// Words in the auxiliary pool
    pub fn aux_size(&self) -> usize {
        self.entry.aux_size
    }

    /// Short lag of the additive recurrence
    pub fn tail_length(&self) -> usize {
        self.entry.tail_length
    }

    /// Table row this generator was built from
    pub fn table_entry(&self) -> &StateTableEntry {
        &self.entry
    }

    pub(crate) fn cursors(&self) -> (usize, usize) {
        (self.j, self.k)
    }

    pub(crate) fn lcg_register(&self) -> u32 {
        self.lcg_recurr
    }

    pub(crate) fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    /// Rebuild from already validated parts (see `checkpoint`)
    pub(crate) fn from_parts(
        initial_seed: u32,
        entry: StateTableEntry,
        buffer: Vec<u32>,
        j: usize,
        k: usize,
        lcg_recurr: u32,
    ) -> Self {
        Self {
            initial_seed,
            entry,
            buffer,
            j,
            k,
            lcg_recurr,
        }
    }
}

impl RandomSource for Acg {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Acg::next_u32(self)
    }

    fn reset(&mut self) {
        Acg::reset(self)
    }
}
