//! Statistics options — configuration for exhaustive aggregation and sampling.
//!
//! Purpose
//! -------
//! Collect the knobs for the two statistics workflows in one place:
//! [`StatsOptions`] for the exhaustive enumeration behind
//! [`StreakStatistics`](crate::statistics::StreakStatistics), and
//! [`SampleOpts`] for the Monte-Carlo estimator in
//! [`statistics::sampling`](crate::statistics::sampling).
//!
//! Key behaviors
//! -------------
//! - `new` constructors validate their inputs and return
//!   [`StatsResult`]; `Default` gives the documented settings and never fails.
//! - Fields are public so call sites can use struct-update syntax starting
//!   from `Default::default()`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `StatsOptions::progress_every`, when set, is positive.
//! - `SampleOpts::trials` is positive.
//! - `verbose` only has an effect when the crate is built with the
//!   `obs_slog` feature; without it progress reporting compiles to nothing.
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults and that invalid values are rejected.
use crate::statistics::errors::{StatsError, StatsResult};

/// Default progress-log interval, in permutations.
pub const DEFAULT_PROGRESS_EVERY: u64 = 100_000;

/// Default Monte-Carlo trial count.
pub const DEFAULT_TRIALS: usize = 100;

/// StatsOptions — configuration for exhaustive enumeration.
///
/// Fields
/// ------
/// - `verbose: bool` — if `true`, attaches a terminal logger (behind the
///   `obs_slog` feature) reporting start, progress and completion.
/// - `progress_every: Option<u64>` — log one progress record every this many
///   permutations; `None` disables progress records but keeps the start and
///   completion records.
///
/// Default
/// -------
/// - `verbose`: `false`
/// - `progress_every`: `Some(100_000)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub verbose: bool,
    pub progress_every: Option<u64>,
}

impl StatsOptions {
    /// Create validated enumeration options.
    ///
    /// # Errors
    /// - `StatsError::InvalidProgressInterval` if `progress_every == Some(0)`.
    pub fn new(verbose: bool, progress_every: Option<u64>) -> StatsResult<Self> {
        if progress_every == Some(0) {
            return Err(StatsError::InvalidProgressInterval);
        }
        Ok(Self { verbose, progress_every })
    }
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self { verbose: false, progress_every: Some(DEFAULT_PROGRESS_EVERY) }
    }
}

/// SampleOpts — configuration for Monte-Carlo sampling.
///
/// - `seed: Option<u64>` — `Some(seed)` gives reproducible draws, `None`
///   seeds from system entropy.
/// - `trials: usize` — number of random permutations to average over.
///
/// Defaults to `seed = Some(42)` and `trials = 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOpts {
    pub seed: Option<u64>,
    pub trials: usize,
}

impl SampleOpts {
    /// Create validated sampling options.
    ///
    /// # Errors
    /// - `StatsError::InvalidTrials` if `trials == 0`.
    pub fn new(seed: Option<u64>, trials: usize) -> StatsResult<Self> {
        if trials == 0 {
            return Err(StatsError::InvalidTrials { trials });
        }
        Ok(Self { seed, trials })
    }
}

impl Default for SampleOpts {
    fn default() -> Self {
        Self { seed: Some(42), trials: DEFAULT_TRIALS }
    }
}
