//! Random sources and in-place permutation.
//!
//! Provides seeded RNG construction, Fisher-Yates shuffle, and an
//! unchecked element swap. Any [`rand::Rng`] works as the random source,
//! which keeps shuffles reproducible under test.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;
use tracing::trace;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_quant::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Exchanges the elements at `i` and `j` and returns the slice.
///
/// # Panics
/// Panics if either index is out of bounds. Checking indices is the
/// caller's job.
///
/// # Examples
/// ```
/// use u_quant::random::swap;
/// let mut v = ['a', 'b', 'c'];
/// assert_eq!(swap(&mut v, 0, 2), &['c', 'b', 'a']);
/// ```
pub fn swap<T>(slice: &mut [T], i: usize, j: usize) -> &mut [T] {
    slice.swap(i, j);
    slice
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely when `rng` is uniform.
///
/// # Algorithm
/// For `i` from `n − 1` down to `1`, draw `u ∈ [0, 1)` and swap position
/// `i` with `j = ⌊u · (i + 1)⌋`. One draw per position, so a fixed
/// sequence of draws always yields the same permutation.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_quant::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// let shuffled = shuffle(&mut v, &mut rng);
/// shuffled.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<'a, T, R: Rng + ?Sized>(slice: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    let n = slice.len();
    if n <= 1 {
        return slice;
    }
    for i in (1..n).rev() {
        let u: f64 = rng.random();
        // u * (i + 1) can round up to i + 1 when u is within an ulp of 1
        let j = ((u * (i + 1) as f64).floor() as usize).min(i);
        trace!(i, j, "shuffle swap");
        swap(slice, i, j);
    }
    slice
}

// ============================================================================
// Tests
// ============================================================================
