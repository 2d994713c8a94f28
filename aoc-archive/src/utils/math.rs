//! Small numeric and slice helpers

use rand::Rng;
use std::ops::{Add, Rem};

/// Remainder that wraps negative values back into `0..m`
///
/// ```
/// use aoc_archive::utils::math::modulo;
///
/// assert_eq!(modulo(-1, 100), 99);
/// assert_eq!(modulo(250, 100), 50);
/// ```
pub fn modulo<T>(a: T, m: T) -> T
where
    T: Copy + Add<Output = T> + Rem<Output = T>,
{
    ((a % m) + m) % m
}

/// Rotate in place so the last `n` elements move to the front; `n` may exceed the length
pub fn rotate_right<T>(items: &mut [T], n: usize) {
    if !items.is_empty() {
        let len = items.len();
        items.rotate_right(n % len);
    }
}

/// Rotate in place so the first `n` elements move to the back
pub fn rotate_left<T>(items: &mut [T], n: usize) {
    if !items.is_empty() {
        let len = items.len();
        items.rotate_left(n % len);
    }
}

/// In-place Fisher-Yates shuffle
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rotate_wraps_past_length() {
        let mut row = [1, 2, 3, 4, 5];
        rotate_right(&mut row, 7);
        assert_eq!(row, [4, 5, 1, 2, 3]);
        rotate_left(&mut row, 2);
        assert_eq!(row, [1, 2, 3, 4, 5]);

        let mut empty: [u8; 0] = [];
        rotate_right(&mut empty, 3);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        fisher_yates(&mut a, &mut StdRng::seed_from_u64(7));
        fisher_yates(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_modulo_in_range(a in -10_000i64..10_000, m in 1i64..500) {
            let r = modulo(a, m);
            prop_assert!((0..m).contains(&r));
            prop_assert_eq!((a - r) % m, 0);
        }

        #[test]
        fn prop_rotate_right_then_left_is_identity(items in prop::collection::vec(any::<u8>(), 0..30), n in 0usize..100) {
            let mut rotated = items.clone();
            rotate_right(&mut rotated, n);
            rotate_left(&mut rotated, n);
            prop_assert_eq!(rotated, items);
        }

        #[test]
        fn prop_shuffle_is_permutation(items in prop::collection::vec(any::<u16>(), 0..50), seed in any::<u64>()) {
            let mut shuffled = items.clone();
            fisher_yates(&mut shuffled, &mut StdRng::seed_from_u64(seed));
            let mut expected = items.clone();
            expected.sort_unstable();
            shuffled.sort_unstable();
            prop_assert_eq!(shuffled, expected);
        }
    }
}
