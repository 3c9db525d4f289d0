//! statistics — aggregate streak statistics and matrix summary transforms.
//!
//! Purpose
//! -------
//! Turn streak decompositions of many permutations into counts that can be
//! compared against closed-form combinatorial identities.
//!
//! Key behaviors
//! -------------
//! - [`StreakStatistics`] enumerates all permutations of {1..n} and exposes
//!   by-length, by-count, by-leader and missing-length views.
//! - [`summary`] holds the reusable transforms: [`add_summary_row_column`],
//!   its strict counterpart [`summarize`], [`invert_zeros_and_nonzeros`],
//!   and [`create_array_from_kv`].
//! - [`mean_kv_streaks`] estimates the mean streak count by sampling, for n
//!   beyond enumeration.
//!
//! Conventions
//! -----------
//! - Row 0 and column 0 of every count matrix are summary slots
//!   ([`summary::SUM`]).
//! - Failures surface as [`StatsError`] (aggregation, options, sampling) or
//!   [`MatrixError`] (transforms).
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use streak_stats::statistics::prelude::*;
//!
//! let stats = StreakStatistics::build(5)?;
//! assert_eq!(stats.of_length(1)?, 120);
//! assert_eq!(stats.missing_streak_lengths()[0], 44); // D(5)
//! # Ok::<(), StatsError>(())
//! ```

pub mod errors;
pub mod observe;
pub mod options;
pub mod sampling;
pub mod streak_stats;
pub mod summary;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{MatrixError, MatrixResult, StatsError, StatsResult};
pub use self::options::{SampleOpts, StatsOptions};
pub use self::sampling::{expected_mean_streak_count, harmonic_number, mean_kv_streaks};
pub use self::streak_stats::StreakStatistics;
pub use self::summary::{
    add_summary_row_column, create_array_from_kv, invert_zeros_and_nonzeros, summarize,
};

pub mod prelude {
    pub use super::errors::{MatrixError, StatsError, StatsResult};
    pub use super::options::{SampleOpts, StatsOptions};
    pub use super::sampling::mean_kv_streaks;
    pub use super::streak_stats::StreakStatistics;
    pub use super::summary::{add_summary_row_column, summarize};
}
