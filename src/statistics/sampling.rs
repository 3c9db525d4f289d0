//! Monte-Carlo estimates for domains too large to enumerate.
//!
//! The mean number of streaks over all permutations of {1..n} is the
//! harmonic number `H_n ~ ln n + γ`. [`mean_kv_streaks`] estimates it by
//! decomposing random permutations, so the asymptote can be checked at sizes
//! (n in the thousands) where
//! [`StreakStatistics`](crate::statistics::StreakStatistics) is out of reach.
use statrs::consts::EULER_MASCHERONI;

use crate::{
    permutations::{random_permutation, seeded_rng},
    statistics::{
        errors::{StatsError, StatsResult},
        options::SampleOpts,
    },
    streaks::KvStreaks,
};

/// Average number of streaks over `opts.trials` random permutations of
/// {1..n}.
///
/// # Errors
/// - `StatsError::EmptyDomain` if `n == 0`.
/// - `StatsError::InvalidTrials` if `opts.trials == 0`.
///
/// # Examples
/// ```rust
/// # use streak_stats::statistics::{SampleOpts, mean_kv_streaks};
/// let opts = SampleOpts { seed: Some(1), trials: 10 };
/// let mean = mean_kv_streaks(1, &opts)?;
/// assert_eq!(mean, 1.0);
/// # Ok::<(), streak_stats::statistics::StatsError>(())
/// ```
pub fn mean_kv_streaks(n: usize, opts: &SampleOpts) -> StatsResult<f64> {
    if n == 0 {
        return Err(StatsError::EmptyDomain);
    }
    if opts.trials == 0 {
        return Err(StatsError::InvalidTrials { trials: opts.trials });
    }

    let mut rng = seeded_rng(opts.seed);
    let mut total_streaks = 0_usize;
    for _ in 0..opts.trials {
        let perm = random_permutation(n, &mut rng);
        total_streaks += KvStreaks::decompose(&perm)?.len();
    }
    Ok(total_streaks as f64 / opts.trials as f64)
}

/// Asymptotic mean number of streaks, `ln n + γ`.
pub fn expected_mean_streak_count(n: usize) -> f64 {
    (n as f64).ln() + EULER_MASCHERONI
}

/// Harmonic number `H_n = 1 + 1/2 + … + 1/n`, the exact mean number of
/// streaks; `H_0 = 0`.
pub fn harmonic_number(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The Monte-Carlo mean against `ln n + γ` for n = 1000.
    // - Reproducibility under a fixed seed.
    // - Rejection of empty domains and zero trials.
    // - Harmonic-number helpers.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the sampled mean streak count tracks the harmonic
    // asymptote.
    //
    // Given
    // -----
    // - n = 1000, seed 42, 400 trials.
    //
    // Expect
    // ------
    // - The estimate is within 10% of `ln 1000 + γ`.
    fn mean_kv_streaks_tracks_harmonic_asymptote() {
        // Arrange
        let n = 1000;
        let opts = SampleOpts { seed: Some(42), trials: 400 };

        // Act
        let mean = mean_kv_streaks(n, &opts).expect("valid inputs");

        // Assert
        assert_relative_eq!(mean, expected_mean_streak_count(n), max_relative = 0.10);
    }

    #[test]
    // Purpose
    // -------
    // Ensure equal seeds give equal estimates.
    //
    // Given
    // -----
    // - Default options twice, n = 50.
    //
    // Expect
    // ------
    // - Identical means.
    fn mean_kv_streaks_is_reproducible_with_seed() {
        let opts = SampleOpts::default();
        assert_eq!(mean_kv_streaks(50, &opts), mean_kv_streaks(50, &opts));
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate inputs are rejected before sampling.
    //
    // Given
    // -----
    // - n = 0, and trials = 0 (bypassing `SampleOpts::new`).
    //
    // Expect
    // ------
    // - `EmptyDomain` and `InvalidTrials { trials: 0 }`.
    fn mean_kv_streaks_rejects_degenerate_inputs() {
        let zero_trials = SampleOpts { seed: None, trials: 0 };
        assert_eq!(mean_kv_streaks(0, &SampleOpts::default()), Err(StatsError::EmptyDomain));
        assert_eq!(mean_kv_streaks(5, &zero_trials), Err(StatsError::InvalidTrials { trials: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // Check the harmonic helpers.
    //
    // Given
    // -----
    // - n = 0, 1, 4, and 10_000.
    //
    // Expect
    // ------
    // - H_0 = 0, H_1 = 1, H_4 = 25/12, and H_n − ln n → γ.
    fn harmonic_helpers_agree() {
        assert_eq!(harmonic_number(0), 0.0);
        assert_eq!(harmonic_number(1), 1.0);
        assert_relative_eq!(harmonic_number(4), 25.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(
            harmonic_number(10_000),
            expected_mean_streak_count(10_000),
            epsilon = 1e-4
        );
    }
}
