//! Random input generation.
//!
//! All functions take the RNG explicitly so the binary can choose between an
//! OS-seeded generator and a fixed seed for reproducible runs.

use rand::Rng;

/// Produce `n` values drawn independently from `[0, max]`.
///
/// A uniform real in `[0, max)` is rounded to the nearest integer, so both
/// `0` and `max` are reachable (with half weight at the ends).
pub fn random_sequence<R: Rng + ?Sized>(n: usize, max: u32, rng: &mut R) -> Vec<u32> {
    let upper = f64::from(max);
    (0..n)
        .map(|_| (rng.random::<f64>() * upper).round() as u32)
        .collect()
}

/// In-place Fisher-Yates (Knuth) shuffle.
///
/// Walks `i` from the last index down to 1, swapping with a uniformly chosen
/// `j` in `[0, i]`. Slices of length 0 or 1 are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}

/// Ascending identity sequence `0, 1, ..., n - 1`.
///
/// Values are `u32`; callers keep `n` within `u32::MAX` (the config layer caps
/// the item count there).
pub fn range(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// A uniformly random permutation of [`range`].
pub fn shuffled_range<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    let mut values = range(n);
    shuffle(&mut values, rng);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn range_is_identity() {
        assert_eq!(range(5), vec![0, 1, 2, 3, 4]);
        assert!(range(0).is_empty());
    }

    #[test]
    fn random_sequence_respects_bounds() {
        let values = random_sequence(500, 10, &mut rng());
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|&v| v <= 10));
        // Rounding makes both ends reachable.
        assert!(values.contains(&0));
        assert!(values.contains(&10));
    }

    #[test]
    fn random_sequence_zero_len() {
        assert!(random_sequence(0, 10, &mut rng()).is_empty());
    }

    #[test]
    fn shuffle_trivial_slices_untouched() {
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng());
        assert!(empty.is_empty());

        let mut one = vec![42];
        shuffle(&mut one, &mut rng());
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn shuffled_range_is_permutation() {
        let mut r = rng();
        for n in 1..40 {
            let mut values = shuffled_range(n, &mut r);
            values.sort_unstable();
            assert_eq!(values, range(n));
        }
    }

    #[test]
    fn same_seed_same_shuffle() {
        let a = shuffled_range(32, &mut rng());
        let b = shuffled_range(32, &mut rng());
        assert_eq!(a, b);
    }
}
