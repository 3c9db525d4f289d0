//! statistics::streak_stats — exact streak statistics over all permutations.
//!
//! Purpose
//! -------
//! Enumerate every permutation of {1..n}, decompose each into streaks, and
//! aggregate the results into a count matrix plus the marginal, per-count,
//! per-leader and complement views used to check closed-form identities.
//!
//! Key behaviors
//! -------------
//! - [`StreakStatistics::build`] / [`StreakStatistics::build_with`] run the
//!   enumeration once and own the results; all views are read-only.
//! - The count matrix has shape `(n! + 1, n + 1)` and is indexed
//!   `[permutation, streak_length]`; permutation rows start at 1 in
//!   enumeration order, and row 0 / column 0 hold the summary sums.
//! - Summarization goes through the strict
//!   [`summarize`](crate::statistics::summary::summarize), so a non-zero
//!   summary slot or inconsistent totals abort construction.
//! - Missing-length counts come from the complement matrix built during
//!   construction (invert, clear slots, summarize): its row 0 is kept and
//!   the matrix itself is dropped.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 1` and `n!` fits in `usize`; everything else (memory, time) is the
//!   caller's concern. Cost is `O(n · n!)` in both time and memory, which
//!   keeps interactive use to roughly n ≤ 10.
//! - Once built, a `StreakStatistics` never changes.
//!
//! Conventions
//! -----------
//! - Vector views are indexed from 0 but describe lengths / counts / leaders
//!   1..=n: element `i` of `by_length()` is the number of streaks of length
//!   `i + 1`.
//! - The identities checked by the tests:
//!   - streaks of length L: `n!/L`,
//!   - permutations with k streaks: unsigned Stirling numbers `[n k]`,
//!   - permutations where k leads a streak: `n!/k`,
//!   - total length led by k: `(n+1)!/(k(k+1))`,
//!   - mean number of streaks: `H_n`,
//!   - permutations missing length 1: derangement numbers `D(n)`.
use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayView1, s};

use crate::{
    permutations::{checked_factorial, enumerate_permutations},
    statistics::{
        errors::{StatsError, StatsResult},
        observe::EnumerationObserver,
        options::StatsOptions,
        summary::{SUM, create_array_from_kv, invert_zeros_and_nonzeros, summarize},
    },
    streaks::KvStreaks,
};

/// StreakStatistics — aggregated streak counts for all permutations of {1..n}.
///
/// Fields (private)
/// ----------------
/// - `n`: domain size.
/// - `matrix`: summarized count matrix, `(n! + 1) × (n + 1)`.
/// - `counts`: `counts[k]` = permutations with exactly `k` streaks;
///   `counts[0]` = n!.
/// - `missing`: `missing[L]` = permutations with no streak of length `L`;
///   `missing[0]` = total of `missing[1..]`.
/// - `by_leader`, `length_by_leader`: per-leader tallies, slot 0 holding
///   the total.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakStatistics {
    n: usize,
    matrix: Array2<u64>,
    counts: Array1<u64>,
    missing: Array1<u64>,
    by_leader: Array1<u64>,
    length_by_leader: Array1<u64>,
}

impl StreakStatistics {
    /// Build statistics for all permutations of {1..n} with default options.
    ///
    /// # Errors
    /// See [`StreakStatistics::build_with`].
    ///
    /// # Examples
    /// ```rust
    /// # use streak_stats::statistics::StreakStatistics;
    /// let stats = StreakStatistics::build(4)?;
    /// // Unsigned Stirling numbers of the first kind, [4 k] for k = 1..=4.
    /// assert_eq!(stats.by_count().to_vec(), vec![6, 11, 6, 1]);
    /// // n!/L streaks of length L.
    /// assert_eq!(stats.by_length().to_vec(), vec![24, 12, 8, 6]);
    /// # Ok::<(), streak_stats::statistics::StatsError>(())
    /// ```
    pub fn build(n: usize) -> StatsResult<Self> {
        Self::build_with(n, &StatsOptions::default())
    }

    /// Build statistics for all permutations of {1..n}.
    ///
    /// Parameters
    /// ----------
    /// - `n`: `usize`
    ///   Domain size; must be at least 1.
    /// - `opts`: `&StatsOptions`
    ///   Logging configuration (effective with the `obs_slog` feature).
    ///
    /// Returns
    /// -------
    /// `StatsResult<StreakStatistics>`
    ///   Fully aggregated statistics.
    ///
    /// Errors
    /// ------
    /// - `StatsError::EmptyDomain` if `n == 0`.
    /// - `StatsError::DomainTooLarge` if `n!` (or `n! + 1`) overflows `usize`.
    /// - `StatsError::InvalidProgressInterval` if `opts.progress_every` is
    ///   `Some(0)`.
    /// - `StatsError::Matrix(..)` if summarization detects an inconsistency.
    ///
    /// Notes
    /// -----
    /// - Each permutation is decomposed with the compact decomposer; every
    ///   `(leader, length)` pair increments `matrix[[row, length]]` and the
    ///   per-leader tallies.
    pub fn build_with(n: usize, opts: &StatsOptions) -> StatsResult<Self> {
        if n == 0 {
            return Err(StatsError::EmptyDomain);
        }
        if opts.progress_every == Some(0) {
            return Err(StatsError::InvalidProgressInterval);
        }
        let total = checked_factorial(n).ok_or(StatsError::DomainTooLarge { n })?;
        let rows = total.checked_add(1).ok_or(StatsError::DomainTooLarge { n })?;

        let mut observer = EnumerationObserver::new(opts);
        observer.started(n, total);

        let mut raw: Array2<u64> = Array2::zeros((rows, n + 1));
        let mut by_leader: Array1<u64> = Array1::zeros(n + 1);
        let mut length_by_leader: Array1<u64> = Array1::zeros(n + 1);
        for (offset, perm) in enumerate_permutations(n).enumerate() {
            let row = offset + 1;
            for (leader, length) in KvStreaks::decompose(&perm)?.iter() {
                // Permutations of {1..n} only have leaders in 1..=n.
                let leader = leader as usize;
                raw[[row, length]] += 1;
                by_leader[leader] += 1;
                length_by_leader[leader] += length as u64;
            }
            observer.progress(row as u64);
        }

        let matrix = summarize(&raw)?;
        drop(raw);
        by_leader[SUM] = by_leader.slice(s![1..]).sum();
        length_by_leader[SUM] = length_by_leader.slice(s![1..]).sum();
        let counts = count_by_streak_number(&matrix, total)?;
        let missing = complement_of(&matrix)?.row(SUM).to_owned();

        observer.finished(matrix[[SUM, SUM]]);
        Ok(StreakStatistics { n, matrix, counts, missing, by_leader, length_by_leader })
    }

    /// Domain size n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of enumerated permutations, n!.
    pub fn permutation_count(&self) -> usize {
        self.matrix.nrows() - 1
    }

    /// The summarized count matrix, `(n! + 1) × (n + 1)`.
    pub fn count_matrix(&self) -> &Array2<u64> {
        &self.matrix
    }

    /// Number of streaks of each length 1..=n over all permutations.
    pub fn by_length(&self) -> ArrayView1<'_, u64> {
        self.matrix.slice(s![SUM, 1..])
    }

    /// Number of permutations with exactly k streaks, for k = 1..=n.
    pub fn by_count(&self) -> ArrayView1<'_, u64> {
        self.counts.slice(s![1..])
    }

    /// Number of streaks of length `length` over all permutations.
    ///
    /// # Errors
    /// - `StatsError::LengthOutOfRange` unless `1 ≤ length ≤ n`.
    pub fn of_length(&self, length: usize) -> StatsResult<u64> {
        if !(1..=self.n).contains(&length) {
            return Err(StatsError::LengthOutOfRange { length, n: self.n });
        }
        Ok(self.matrix[[SUM, length]])
    }

    /// Number of permutations with exactly `count` streaks.
    ///
    /// # Errors
    /// - `StatsError::CountOutOfRange` unless `1 ≤ count ≤ n`.
    pub fn of_count(&self, count: usize) -> StatsResult<u64> {
        if !(1..=self.n).contains(&count) {
            return Err(StatsError::CountOutOfRange { count, n: self.n });
        }
        Ok(self.counts[count])
    }

    /// Number of permutations with no streak of each length 1..=n.
    ///
    /// Row 0 of [`StreakStatistics::complement_matrix`] without the corner,
    /// kept from `build`; close to `n!·exp(-1/L)`, and exactly the
    /// derangement number `D(n)` for `L = 1`.
    pub fn missing_streak_lengths(&self) -> ArrayView1<'_, u64> {
        self.missing.slice(s![1..])
    }

    /// Summarized 0/1 matrix marking, per permutation, which lengths are
    /// absent.
    ///
    /// Rebuilt on demand: the count matrix body is inverted, its summary
    /// slots are zeroed, and the result is summarized again.
    ///
    /// # Errors
    /// - `StatsError::Matrix(..)` if the transforms fail; this does not
    ///   happen for a matrix produced by `build`.
    pub fn complement_matrix(&self) -> StatsResult<Array2<u64>> {
        complement_of(&self.matrix)
    }

    /// Number of permutations in which k leads a streak, for k = 1..=n.
    pub fn by_leader(&self) -> ArrayView1<'_, u64> {
        self.by_leader.slice(s![1..])
    }

    /// Total length of all streaks led by k, for k = 1..=n.
    pub fn length_by_leader(&self) -> ArrayView1<'_, u64> {
        self.length_by_leader.slice(s![1..])
    }

    /// Mean number of streaks per permutation (the harmonic number `H_n`).
    pub fn mean_streak_count(&self) -> f64 {
        self.matrix[[SUM, SUM]] as f64 / self.permutation_count() as f64
    }
}

// ---- Helper Methods ----

/// Tally column 0 (streaks per permutation) into `counts[k]`, with
/// `counts[0] = n!`.
fn count_by_streak_number(matrix: &Array2<u64>, total: usize) -> StatsResult<Array1<u64>> {
    let mut tally: BTreeMap<usize, u64> = BTreeMap::new();
    tally.insert(SUM, total as u64);
    for &streaks in matrix.slice(s![1.., SUM]) {
        *tally.entry(streaks as usize).or_insert(0) += 1;
    }
    let keys: Vec<usize> = tally.keys().copied().collect();
    let vals: Vec<u64> = tally.values().copied().collect();
    Ok(create_array_from_kv(&keys, &vals)?)
}

/// Invert the body of a summarized count matrix, clear its summary slots,
/// and summarize the 0/1 result.
fn complement_of(matrix: &Array2<u64>) -> StatsResult<Array2<u64>> {
    let mut inverted = invert_zeros_and_nonzeros(matrix)?;
    inverted.row_mut(SUM).fill(0);
    inverted.column_mut(SUM).fill(0);
    Ok(summarize(&inverted)?)
}
