//! Static parameter tables for the ACG generator
//!
//! Three process-wide constants drive the generator:
//!
//! - [`STATE_TABLE`]: lag pairs from Knuth vol. II (p. 28), each with the
//!   size of the auxiliary scramble pool used alongside it
//! - [`PERMUTATIONS`]: 16 byte permutations of a 32-bit word, each as four masks
//! - [`SEED_TABLE`]: constants used to spread small seeds across the state space
//!
//! All tables are read-only after program start and need no locking.

/// One row of the state-size table
///
/// The additive recurrence is `x[n] = x[n - state_size] + x[n - tail_length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTableEntry {
    /// Short lag of the additive recurrence
    pub tail_length: usize,
    /// Long lag, i.e. number of words in the main state region
    pub state_size: usize,
    /// Number of words in the auxiliary region (power of two)
    pub aux_size: usize,
}

impl StateTableEntry {
    const fn new(tail_length: usize, state_size: usize, aux_size: usize) -> Self {
        Self {
            tail_length,
            state_size,
            aux_size,
        }
    }

    /// Total buffer length (main + auxiliary)
    pub const fn buffer_len(&self) -> usize {
        self.state_size + self.aux_size
    }

    /// Distance from the long-lag cursor back to the short-lag cursor
    pub const fn tail_behind(&self) -> usize {
        self.state_size - self.tail_length
    }
}

const STATE_ROWS: [StateTableEntry; 28] = [
    StateTableEntry::new(3, 7, 16),
    StateTableEntry::new(4, 9, 32),
    StateTableEntry::new(3, 10, 32),
    StateTableEntry::new(1, 11, 32),
    StateTableEntry::new(1, 15, 64),
    StateTableEntry::new(3, 17, 128),
    StateTableEntry::new(7, 18, 128),
    StateTableEntry::new(3, 20, 128),
    StateTableEntry::new(2, 21, 128),
    StateTableEntry::new(1, 22, 128),
    StateTableEntry::new(5, 23, 128),
    StateTableEntry::new(3, 25, 128),
    StateTableEntry::new(2, 29, 128),
    StateTableEntry::new(3, 31, 128),
    StateTableEntry::new(13, 33, 256),
    StateTableEntry::new(2, 35, 256),
    StateTableEntry::new(11, 36, 256),
    StateTableEntry::new(14, 39, 256),
    StateTableEntry::new(3, 41, 256),
    StateTableEntry::new(9, 49, 256),
    StateTableEntry::new(3, 52, 256),
    StateTableEntry::new(24, 55, 256),
    StateTableEntry::new(7, 57, 256),
    StateTableEntry::new(19, 58, 256),
    StateTableEntry::new(38, 89, 512),
    StateTableEntry::new(17, 95, 512),
    StateTableEntry::new(6, 97, 512),
    StateTableEntry::new(11, 98, 512),
];

/// Supported table sizes, ordered by increasing `state_size`
pub static STATE_TABLE: [StateTableEntry; 28] = STATE_ROWS;

/// Number of masks in the permutation table
pub const PERMUTATION_TABLE_SIZE: usize = 64;

/// Selects a permutation group from the low bits of an additive result.
///
/// Keeps bits 2..=5 only, so the group start is a multiple of four and the
/// four masks after it always exist.
pub const PERMUTATION_SELECT_MASK: u32 = 0x3c;

/// Byte permutations, grouped in fours.
///
/// Mask `n` of a group applies to the input word rotated left by
/// `(32 - 8n) % 32` bits. The trailing comment on each row is the source
/// byte written to result bytes 3, 2, 1, 0.
pub static PERMUTATIONS: [u32; PERMUTATION_TABLE_SIZE] = [
    0xffffffff, 0x00000000, 0x00000000, 0x00000000, // 3210
    0x0000ffff, 0x00ff0000, 0x00000000, 0xff000000, // 2310
    0xff0000ff, 0x0000ff00, 0x00000000, 0x00ff0000, // 3120
    0x00ff00ff, 0x00000000, 0xff00ff00, 0x00000000, // 1230
    //
    0xffff0000, 0x000000ff, 0x00000000, 0x0000ff00, // 3201
    0x00000000, 0x00ff00ff, 0x00000000, 0xff00ff00, // 2301
    0xff000000, 0x00000000, 0x000000ff, 0x00ffff00, // 3102
    0x00000000, 0x00000000, 0x00000000, 0xffffffff, // 2103
    //
    0xff00ff00, 0x00000000, 0x00ff00ff, 0x00000000, // 3012
    0x0000ff00, 0x00000000, 0x00ff0000, 0xff0000ff, // 2013
    0x00000000, 0x00000000, 0xffffffff, 0x00000000, // 1032
    0x00000000, 0x0000ff00, 0xffff0000, 0x000000ff, // 1023
    //
    0x00000000, 0xffffffff, 0x00000000, 0x00000000, // 0321
    0x00ffff00, 0xff000000, 0x00000000, 0x000000ff, // 0213
    0x00000000, 0xff000000, 0x0000ffff, 0x00ff0000, // 0132
    0x00000000, 0xff00ff00, 0x00000000, 0x00ff00ff, // 0123
];

/// Number of entries in [`SEED_TABLE`]
pub const SEED_TABLE_SIZE: usize = 32;

/// Seeds substituted for (or mixed into) the caller's seed
pub static SEED_TABLE: [u32; SEED_TABLE_SIZE] = [
    0xbdcc47e5, 0x54aea45d, 0xec0df859, 0xda84637b, //
    0xc8c6cb4f, 0x35574b01, 0x28260b7d, 0x0d07fdbf, //
    0x9faaeeb0, 0x613dd169, 0x5ce2d818, 0x85b9e706, //
    0xab2469db, 0xda02b0dc, 0x45c60d6e, 0xffe49d10, //
    0x7224fea3, 0xf9684fc9, 0xfc7ee074, 0x326ce92a, //
    0x366d13b5, 0x17aaa731, 0xeb83a675, 0x7781cb32, //
    0x4ec7c92d, 0x7f187521, 0x2cf346b4, 0xad13310f, //
    0xb89cff2b, 0x12164de1, 0xa865168d, 0x32b56cdf, //
];

// Index arithmetic in the generator masks with `len - 1`.
const _: () = {
    assert!(SEED_TABLE_SIZE.is_power_of_two());
    assert!(PERMUTATION_TABLE_SIZE.is_power_of_two());
    assert!(PERMUTATION_SELECT_MASK as usize + 4 <= PERMUTATION_TABLE_SIZE);
    let mut i = 0;
    while i < STATE_ROWS.len() {
        let entry = STATE_ROWS[i];
        assert!(entry.aux_size.is_power_of_two());
        assert!(entry.tail_length >= 1 && entry.tail_length < entry.state_size);
        if i > 0 {
            assert!(STATE_ROWS[i - 1].state_size < entry.state_size);
        }
        i += 1;
    }
};

/// Pick the smallest entry with `state_size >= min_size`, or the largest
/// entry when none is big enough.
///
/// # Example
/// ```
/// use beam_random::rng::tables::select_state_entry;
///
/// assert_eq!(select_state_entry(20).state_size, 20);
/// assert_eq!(select_state_entry(24).state_size, 25);
/// assert_eq!(select_state_entry(10_000).state_size, 98);
/// ```
pub fn select_state_entry(min_size: usize) -> &'static StateTableEntry {
    match STATE_TABLE.iter().find(|e| e.state_size >= min_size) {
        Some(entry) => entry,
        None => &STATE_TABLE[STATE_TABLE.len() - 1],
    }
}

/// Position of `entry` in [`STATE_TABLE`], if it is one of the static rows
pub fn state_entry_index(entry: &StateTableEntry) -> Option<usize> {
    STATE_TABLE.iter().position(|e| e == entry)
}

/// The four masks selected by `selector & 0x3c`
#[inline]
pub fn permutation_group(selector: u32) -> &'static [u32] {
    let start = (selector & PERMUTATION_SELECT_MASK) as usize;
    &PERMUTATIONS[start..start + 4]
}

/// Diversify a caller seed through [`SEED_TABLE`]
///
/// Small seeds are replaced outright; larger ones are XOR-ed with the entry
/// picked by their low bits.
#[inline]
pub fn diversify_seed(seed: u32) -> u32 {
    let idx = seed as usize;
    if idx < SEED_TABLE_SIZE {
        SEED_TABLE[idx]
    } else {
        seed ^ SEED_TABLE[idx & (SEED_TABLE_SIZE - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_exact_match() {
        for entry in STATE_TABLE.iter() {
            assert_eq!(select_state_entry(entry.state_size), entry);
        }
    }

    #[test]
    fn test_select_rounds_up() {
        assert_eq!(select_state_entry(0).state_size, 7);
        assert_eq!(select_state_entry(8).state_size, 9);
        assert_eq!(select_state_entry(60).state_size, 89);
    }

    #[test]
    fn test_select_falls_back_to_largest() {
        let largest = select_state_entry(100);
        assert_eq!(*largest, StateTableEntry::new(11, 98, 512));
        assert_eq!(select_state_entry(usize::MAX), largest);
    }

    #[test]
    fn test_permutation_groups_stay_in_table() {
        for selector in (0u32..64).step_by(4) {
            let group = permutation_group(selector);
            assert_eq!(group.len(), 4);
            assert!(selector as usize + 4 <= PERMUTATION_TABLE_SIZE);
        }
        // High bits and the two low bits are ignored
        assert_eq!(permutation_group(0xffff_ffff), permutation_group(0x3c));
        assert_eq!(permutation_group(0x0000_0003), permutation_group(0));
    }

    #[test]
    fn test_each_group_is_a_byte_permutation() {
        let word: u32 = 0x4433_2211;
        for selector in (0u32..64).step_by(4) {
            let m = permutation_group(selector);

            // Masks partition the 32 bits
            assert_eq!(m[0] | m[1] | m[2] | m[3], 0xffff_ffff);
            for a in 0..4 {
                for b in (a + 1)..4 {
                    assert_eq!(m[a] & m[b], 0, "group {} masks overlap", selector / 4);
                }
            }

            let out = (m[0] & word)
                | (m[1] & word.rotate_left(24))
                | (m[2] & word.rotate_left(16))
                | (m[3] & word.rotate_left(8));
            let mut bytes = out.to_le_bytes();
            bytes.sort_unstable();
            assert_eq!(bytes, [0x11, 0x22, 0x33, 0x44]);
        }
    }

    #[test]
    fn test_identity_and_reverse_groups() {
        let word: u32 = 0x4433_2211;
        let apply = |selector: u32| {
            let m = permutation_group(selector);
            (m[0] & word)
                | (m[1] & word.rotate_left(24))
                | (m[2] & word.rotate_left(16))
                | (m[3] & word.rotate_left(8))
        };
        assert_eq!(apply(0), 0x4433_2211);
        assert_eq!(apply(60), 0x1122_3344);
    }

    #[test]
    fn test_diversify_small_and_large_seeds() {
        assert_eq!(diversify_seed(0), 0xbdcc47e5);
        assert_eq!(diversify_seed(31), 0x32b56cdf);
        assert_eq!(diversify_seed(32), 32 ^ 0xbdcc47e5);
        assert_ne!(diversify_seed(0), diversify_seed(32));
    }
}
