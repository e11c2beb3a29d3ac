//! Property tests across seeds and table sizes

use beam_random::distributions::restrict_to_range;
use beam_random::rng::tables::{permutation_group, PERMUTATIONS};
use beam_random::{Acg, RandomInteger};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u32>(), size in 0usize..200) {
        let mut a = Acg::new(seed, size);
        let mut b = Acg::new(seed, size);
        for _ in 0..300 {
            prop_assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn prop_reset_replays_sequence(seed in any::<u32>(), size in 0usize..200, skip in 0usize..500) {
        let mut rng = Acg::new(seed, size);
        for _ in 0..skip {
            rng.next_u32();
        }
        rng.reset();

        let mut fresh = Acg::new(seed, size);
        for _ in 0..100 {
            prop_assert_eq!(rng.next_u32(), fresh.next_u32());
        }
    }

    #[test]
    fn prop_size_never_below_request_unless_capped(size in 0usize..1000) {
        let rng = Acg::new(0, size);
        prop_assert!(rng.state_size() >= size.min(98));
        prop_assert!(rng.aux_size().is_power_of_two());
    }

    #[test]
    fn prop_snapshot_restore_continues(seed in any::<u32>(), size in 0usize..120, skip in 0usize..300) {
        let mut rng = Acg::new(seed, size);
        for _ in 0..skip {
            rng.next_u32();
        }
        let mut restored = Acg::restore(rng.snapshot()).unwrap();
        for _ in 0..50 {
            prop_assert_eq!(restored.next_u32(), rng.next_u32());
        }
    }

    #[test]
    fn prop_range_draws_inclusive(seed in any::<u32>(), low in -1_000_000i64..1_000_000, width in 0i64..10_000) {
        let high = low + width;
        let mut ints = RandomInteger::new(low, high, Acg::new(seed, 100)).unwrap();
        for _ in 0..200 {
            let v = ints.as_i64();
            prop_assert!(v >= low && v <= high);
        }
    }

    #[test]
    fn prop_restrict_rejects_inverted(raw in any::<u32>(), low in any::<i32>(), gap in 1i64..1000) {
        let low = i64::from(low);
        prop_assert!(restrict_to_range(raw, low, low - gap).is_err());
    }

    #[test]
    fn prop_permutation_group_in_table(selector in any::<u32>()) {
        let group = permutation_group(selector);
        prop_assert_eq!(group.len(), 4);
        let start = (selector & 0x3c) as usize;
        prop_assert_eq!(group, &PERMUTATIONS[start..start + 4]);
    }

    #[test]
    fn prop_f64_in_unit_interval(seed in any::<u32>()) {
        use beam_random::RandomSource;
        let mut rng = Acg::new(seed, 50);
        for _ in 0..200 {
            let x = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&x));
        }
    }
}
