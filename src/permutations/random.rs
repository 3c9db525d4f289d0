//! Uniform random permutations of {1..n}.
//!
//! Thin wrappers over `rand`'s Fisher–Yates shuffle, used by the Monte-Carlo
//! estimators in `statistics::sampling` where exhaustive enumeration is out of
//! reach (n in the thousands).
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Build the RNG used for sampling.
///
/// `Some(seed)` gives a reproducible `StdRng`; `None` seeds from system
/// entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw a uniformly random permutation of {1, …, n}.
///
/// # Examples
/// ```rust
/// # use streak_stats::permutations::{random_permutation, seeded_rng};
/// let mut rng = seeded_rng(Some(7));
/// let mut perm = random_permutation(5, &mut rng);
/// perm.sort_unstable();
/// assert_eq!(perm, vec![1, 2, 3, 4, 5]);
/// ```
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let mut perm: Vec<i64> = (1..=n as i64).collect();
    perm.shuffle(rng);
    perm
}
