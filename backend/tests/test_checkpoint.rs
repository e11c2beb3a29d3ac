//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: Restored generator produces identical results
//! - Integrity: Tampered or inconsistent snapshots are rejected
//! - Reset: A restored generator still resets to its original seed

use beam_random::{Acg, AcgSnapshot, CheckpointError, RandomStream};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator advanced `draws` steps from seed 42
fn advanced_generator(draws: usize) -> Acg {
    let mut rng = Acg::new(42, 100);
    for _ in 0..draws {
        rng.next_u32();
    }
    rng
}

/// Valid snapshot of a generator part way through its stream
fn valid_snapshot() -> AcgSnapshot {
    advanced_generator(250).snapshot()
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_restore_continues_sequence() {
    let mut original = advanced_generator(1234);
    let mut restored = Acg::restore(original.snapshot()).expect("valid snapshot");

    for i in 0..5000 {
        assert_eq!(
            original.next_u32(),
            restored.next_u32(),
            "Sequence diverged at draw {}",
            i
        );
    }
}

#[test]
fn test_restore_via_json() {
    let mut original = advanced_generator(77);
    let json = original.snapshot().to_json().unwrap();

    let snapshot = AcgSnapshot::from_json(&json).unwrap();
    let mut restored = Acg::restore(snapshot).unwrap();
    assert_eq!(restored, original);
    assert_eq!(restored.next_u32(), original.next_u32());
}

#[test]
fn test_restored_generator_resets_to_original_seed() {
    let mut restored = Acg::restore(advanced_generator(500).snapshot()).unwrap();
    restored.reset();

    let mut fresh = Acg::new(42, 100);
    for _ in 0..100 {
        assert_eq!(restored.next_u32(), fresh.next_u32());
    }
}

#[test]
fn test_snapshot_every_table_size() {
    for size in [7, 15, 31, 58, 98] {
        let mut rng = Acg::new(3, size);
        for _ in 0..size * 3 {
            rng.next_u32();
        }
        let mut restored = Acg::restore(rng.snapshot()).unwrap();
        assert_eq!(restored.next_u32(), rng.next_u32());
    }
}

#[test]
fn test_stream_snapshot_roundtrip() {
    let mut stream = RandomStream::new(9, 100);
    stream.normal(0.0, 1.0).unwrap();
    stream.uniform(0.0, 1.0).unwrap();

    let json = serde_json::to_string(&stream.snapshot()).unwrap();
    let mut restored = RandomStream::restore(serde_json::from_str(&json).unwrap()).unwrap();

    for _ in 0..100 {
        assert_eq!(restored.normal(1.0, 2.0).unwrap(), stream.normal(1.0, 2.0).unwrap());
        assert_eq!(restored.integer(0, 9).unwrap(), stream.integer(0, 9).unwrap());
    }
}

// ============================================================================
// Validation Failures
// ============================================================================

#[test]
fn test_reject_tampered_buffer() {
    let mut snapshot = valid_snapshot();
    snapshot.buffer[10] ^= 1;
    assert!(matches!(
        Acg::restore(snapshot),
        Err(CheckpointError::DigestMismatch { .. })
    ));
}

#[test]
fn test_reject_tampered_lcg_register() {
    let mut snapshot = valid_snapshot();
    snapshot.lcg_recurr = snapshot.lcg_recurr.wrapping_add(1);
    assert!(matches!(
        Acg::restore(snapshot),
        Err(CheckpointError::DigestMismatch { .. })
    ));
}

#[test]
fn test_reject_unknown_table_entry() {
    let mut snapshot = valid_snapshot();
    snapshot.state_size = 100;
    assert_eq!(
        Acg::restore(snapshot),
        Err(CheckpointError::UnknownTableEntry {
            tail_length: 11,
            state_size: 100,
            aux_size: 512
        })
    );
}

#[test]
fn test_reject_truncated_buffer() {
    let mut snapshot = valid_snapshot();
    snapshot.buffer.pop();
    assert_eq!(
        Acg::restore(snapshot),
        Err(CheckpointError::BufferLength {
            expected: 610,
            actual: 609
        })
    );
}

#[test]
fn test_reject_cursor_out_of_range() {
    let mut snapshot = valid_snapshot();
    snapshot.k = 98;
    assert!(matches!(
        Acg::restore(snapshot),
        Err(CheckpointError::CursorOutOfRange { k: 98, .. })
    ));
}

#[test]
fn test_reject_malformed_json() {
    let err = AcgSnapshot::from_json("{\"seed\": 1}").unwrap_err();
    assert!(matches!(err, CheckpointError::Serialization(_)));
}
