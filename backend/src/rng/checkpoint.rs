//! Checkpoint - Save/Load Generator State
//!
//! Captures the complete state of an [`Acg`] so a long Monte Carlo run can
//! be paused and resumed mid-stream.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact sequence
//! - **Table Integrity**: Sizes must match one of the static table entries
//! - **Cursor Integrity**: Both cursors in range and `tail_behind` apart
//! - **Tamper Detection**: SHA256 digest over the payload must match

use super::acg::Acg;
use super::tables::{self, StateTableEntry};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while restoring a generator from a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    #[error("Unknown state table entry: tail={tail_length}, state={state_size}, aux={aux_size}")]
    UnknownTableEntry {
        tail_length: usize,
        state_size: usize,
        aux_size: usize,
    },

    #[error("Buffer length {actual} does not match table entry (expected {expected})")]
    BufferLength { expected: usize, actual: usize },

    #[error("Cursor out of range: j={j}, k={k}, state_size={state_size}")]
    CursorOutOfRange { j: usize, k: usize, state_size: usize },

    #[error("Cursors not {expected} apart: j={j}, k={k}")]
    CursorSpacing { j: usize, k: usize, expected: usize },

    #[error("Snapshot digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch { stored: String, computed: String },
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
///
/// # Example
/// ```
/// use beam_random::Acg;
///
/// let mut rng = Acg::new(12345, 100);
/// for _ in 0..10 {
///     rng.next_u32();
/// }
///
/// let snapshot = rng.snapshot();
/// let mut restored = Acg::restore(snapshot).unwrap();
/// assert_eq!(restored.next_u32(), rng.next_u32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcgSnapshot {
    /// Seed the generator was constructed with (used by `reset`)
    pub seed: u32,

    pub tail_length: usize,
    pub state_size: usize,
    pub aux_size: usize,

    /// Short-lag cursor
    pub j: usize,

    /// Long-lag cursor
    pub k: usize,

    /// LCG register
    pub lcg_recurr: u32,

    /// Main region followed by auxiliary region
    pub buffer: Vec<u32>,

    /// SHA256 of all fields above (hex)
    pub digest: String,
}

impl AcgSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string (no validation; see [`Acg::restore`])
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    fn entry(&self) -> StateTableEntry {
        StateTableEntry {
            tail_length: self.tail_length,
            state_size: self.state_size,
            aux_size: self.aux_size,
        }
    }
}

// ============================================================================
// Digest
// ============================================================================

/// Deterministic SHA256 over the snapshot payload
///
/// Words are fed little-endian so the digest is platform independent.
fn compute_digest(
    seed: u32,
    entry: &StateTableEntry,
    j: usize,
    k: usize,
    lcg_recurr: u32,
    buffer: &[u32],
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    for value in [entry.tail_length, entry.state_size, entry.aux_size, j, k] {
        hasher.update((value as u64).to_le_bytes());
    }
    hasher.update(lcg_recurr.to_le_bytes());
    for word in buffer {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Save / Restore
// ============================================================================

impl Acg {
    /// Capture the full generator state
    pub fn snapshot(&self) -> AcgSnapshot {
        let entry = *self.table_entry();
        let (j, k) = self.cursors();
        let buffer = self.buffer().to_vec();
        let digest = compute_digest(self.seed(), &entry, j, k, self.lcg_register(), &buffer);

        AcgSnapshot {
            seed: self.seed(),
            tail_length: entry.tail_length,
            state_size: entry.state_size,
            aux_size: entry.aux_size,
            j,
            k,
            lcg_recurr: self.lcg_register(),
            buffer,
            digest,
        }
    }

    /// Rebuild a generator from a snapshot after validating it
    pub fn restore(snapshot: AcgSnapshot) -> Result<Self, CheckpointError> {
        validate_snapshot(&snapshot)?;

        let entry = snapshot.entry();
        Ok(Acg::from_parts(
            snapshot.seed,
            entry,
            snapshot.buffer,
            snapshot.j,
            snapshot.k,
            snapshot.lcg_recurr,
        ))
    }
}

/// Validate snapshot integrity
///
/// Checks, in order: table entry, buffer length, cursor range, cursor
/// spacing, digest.
pub fn validate_snapshot(snapshot: &AcgSnapshot) -> Result<(), CheckpointError> {
    let entry = snapshot.entry();

    // 1. Sizes must come from the static table
    if tables::state_entry_index(&entry).is_none() {
        return Err(CheckpointError::UnknownTableEntry {
            tail_length: entry.tail_length,
            state_size: entry.state_size,
            aux_size: entry.aux_size,
        });
    }

    // 2. Buffer covers both regions exactly
    if snapshot.buffer.len() != entry.buffer_len() {
        return Err(CheckpointError::BufferLength {
            expected: entry.buffer_len(),
            actual: snapshot.buffer.len(),
        });
    }

    // 3. Cursors inside the main region
    let n = entry.state_size;
    if snapshot.j >= n || snapshot.k >= n {
        return Err(CheckpointError::CursorOutOfRange {
            j: snapshot.j,
            k: snapshot.k,
            state_size: n,
        });
    }

    // 4. Cursors move in lockstep, so their distance never changes
    if (snapshot.k + n - snapshot.j) % n != entry.tail_behind() {
        return Err(CheckpointError::CursorSpacing {
            j: snapshot.j,
            k: snapshot.k,
            expected: entry.tail_behind(),
        });
    }

    // 5. Digest
    let computed = compute_digest(
        snapshot.seed,
        &entry,
        snapshot.j,
        snapshot.k,
        snapshot.lcg_recurr,
        &snapshot.buffer,
    );
    if computed != snapshot.digest {
        return Err(CheckpointError::DigestMismatch {
            stored: snapshot.digest.clone(),
            computed,
        });
    }

    Ok(())
}
