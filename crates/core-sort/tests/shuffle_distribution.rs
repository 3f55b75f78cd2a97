//! Statistical check that Fisher-Yates is unbiased on a small input.

use core_sort::shuffle;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;

#[test]
fn all_permutations_roughly_equally_likely() {
    const TRIALS: usize = 60_000;
    let mut rng = SmallRng::seed_from_u64(7);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for _ in 0..TRIALS {
        let mut values = [0u8, 1, 2];
        shuffle(&mut values, &mut rng);
        *counts.entry(values).or_default() += 1;
    }
    // 3! permutations, each expected TRIALS / 6 = 10_000 times.
    assert_eq!(counts.len(), 6);
    let expected = TRIALS / 6;
    for (perm, count) in &counts {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 20,
            "permutation {perm:?} seen {count} times (expected ~{expected})"
        );
    }
}
