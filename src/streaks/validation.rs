//! streaks::validation — shared input guard for decomposition entry points.
//!
//! Purpose
//! -------
//! Centralize the distinctness check every decomposition performs before
//! scanning, so the ordered, compact and first-streak variants reject the
//! same inputs with the same error.
//!
//! Conventions
//! -----------
//! - Validation is side-effect free and never panics.
//! - The reported index is that of the *second* occurrence of a value, i.e.
//!   the first position at which the sequence stops being distinct.

use std::collections::HashSet;

use crate::streaks::errors::{StreakError, StreakResult};

/// Validate that `seq` contains pairwise-distinct elements.
///
/// Parameters
/// ----------
/// - `seq`: `&[i64]`
///   Candidate input for a decomposition. May be empty.
///
/// Returns
/// -------
/// `StreakResult<()>`
///   - `Ok(())` when every element occurs once (trivially for empty input).
///   - `Err(StreakError::DuplicateElement { index, value })` for the first
///     repeated value found in a left-to-right scan.
///
/// Performance
/// -----------
/// - O(n) expected time, one `HashSet` allocation of capacity `n`.
///
/// Examples
/// --------
/// ```rust
/// # use streak_stats::streaks::validation::validate_distinct;
/// # use streak_stats::streaks::StreakError;
/// assert!(validate_distinct(&[3, 1, 2]).is_ok());
/// assert_eq!(
///     validate_distinct(&[3, 1, 3]),
///     Err(StreakError::DuplicateElement { index: 2, value: 3 })
/// );
/// ```
pub fn validate_distinct(seq: &[i64]) -> StreakResult<()> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(seq.len());
    for (index, &value) in seq.iter().enumerate() {
        if !seen.insert(value) {
            return Err(StreakError::DuplicateElement { index, value });
        }
    }
    Ok(())
}
