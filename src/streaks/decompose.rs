//! streaks::decompose — linear-scan streak decompositions.
//!
//! Purpose
//! -------
//! Partition a sequence of distinct integers into maximal *streaks*: runs
//! whose first element (the leader) is the minimum of the run. Two views are
//! provided:
//! - [`Streaks`]: the ordered decomposition, keeping every element.
//! - [`KvStreaks`]: the compact leader → length mapping, keeping only the run
//!   boundaries.
//!
//! Key behaviors
//! -------------
//! - Both views scan left to right once. A new streak starts exactly when the
//!   next element is smaller than the current leader; otherwise it joins the
//!   current streak.
//! - Every entry point validates distinctness first via
//!   [`validate_distinct`], so a repeated value is reported before any output
//!   is produced.
//! - [`first_kv_streak`] stops after the first streak boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Concatenating the streaks of a [`Streaks`] value in order reproduces the
//!   input exactly.
//! - [`KvStreaks`] has one entry per streak; leaders are unique because the
//!   input is distinct, and every length is ≥ 1.
//! - The ordered scan compares against `current[0]` with `>=`, the compact
//!   scan compares against the running leader with `>`. On distinct input the
//!   two tests coincide, which the tests below check exhaustively for small
//!   permutations.
//!
//! Performance
//! -----------
//! - O(n) time. `Streaks` allocates one `Vec` per streak; `KvStreaks` stores
//!   one map entry per streak.

use std::collections::BTreeMap;

use crate::streaks::{errors::StreakResult, streak::Streak, validation::validate_distinct};

/// Ordered streak decomposition of a sequence of distinct integers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Streaks {
    streaks: Vec<Streak>,
}

impl Streaks {
    /// Decompose `seq` into its ordered streaks.
    ///
    /// Parameters
    /// ----------
    /// - `seq`: `&[i64]`
    ///   Sequence of pairwise-distinct integers. May be empty.
    ///
    /// Returns
    /// -------
    /// `StreakResult<Streaks>`
    ///   - `Ok` with zero streaks for empty input.
    ///   - `Ok` with the maximal runs otherwise.
    ///
    /// Errors
    /// ------
    /// - `StreakError::DuplicateElement` if `seq` repeats a value.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use streak_stats::streaks::Streaks;
    /// let streaks = Streaks::decompose(&[2, 1, 3]).unwrap();
    /// assert_eq!(streaks.to_nested(), vec![vec![2], vec![1, 3]]);
    /// ```
    pub fn decompose(seq: &[i64]) -> StreakResult<Self> {
        validate_distinct(seq)?;
        let Some((&first, rest)) = seq.split_first() else {
            return Ok(Streaks::default());
        };

        let mut streaks: Vec<Streak> = Vec::new();
        let mut current: Vec<i64> = vec![first];
        for &value in rest {
            if value >= current[0] {
                current.push(value);
            } else {
                let closed = std::mem::replace(&mut current, vec![value]);
                streaks.push(Streak::new(closed)?);
            }
        }
        streaks.push(Streak::new(current)?);

        Ok(Streaks { streaks })
    }

    /// Number of streaks.
    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Streak> {
        self.streaks.iter()
    }

    pub fn as_slice(&self) -> &[Streak] {
        &self.streaks
    }

    /// Leaders in order of appearance; strictly decreasing for any input.
    pub fn leaders(&self) -> Vec<i64> {
        self.streaks.iter().filter_map(Streak::leader).collect()
    }

    /// Streak lengths in order of appearance.
    pub fn lengths(&self) -> Vec<usize> {
        self.streaks.iter().map(Streak::len).collect()
    }

    /// Concatenate the streaks back into the original sequence.
    pub fn flatten(&self) -> Vec<i64> {
        self.streaks.iter().flat_map(|s| s.as_slice().iter().copied()).collect()
    }

    /// Nested `Vec` view, one inner vector per streak.
    pub fn to_nested(&self) -> Vec<Vec<i64>> {
        self.streaks.iter().map(|s| s.as_slice().to_vec()).collect()
    }

    /// Compact leader → length view of this decomposition.
    pub fn to_kv(&self) -> KvStreaks {
        let kv_streaks = self
            .streaks
            .iter()
            .filter_map(|s| s.leader().map(|leader| (leader, s.len())))
            .collect();
        KvStreaks { kv_streaks }
    }
}

impl<'a> IntoIterator for &'a Streaks {
    type Item = &'a Streak;
    type IntoIter = std::slice::Iter<'a, Streak>;

    fn into_iter(self) -> Self::IntoIter {
        self.streaks.iter()
    }
}

impl std::fmt::Display for Streaks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Streaks(")?;
        for (i, streak) in self.streaks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{streak}")?;
        }
        write!(f, ")")
    }
}

/// Compact streak decomposition: leader → streak length.
///
/// Internal element order is discarded; only run boundaries survive. Keys are
/// kept in ascending leader order, which carries no meaning beyond making
/// iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KvStreaks {
    kv_streaks: BTreeMap<i64, usize>,
}

impl KvStreaks {
    /// Compute the leader → length mapping of `seq` in a single scan.
    ///
    /// A new streak starts whenever the next element is not strictly greater
    /// than the running leader.
    ///
    /// # Errors
    /// - `StreakError::DuplicateElement` if `seq` repeats a value.
    ///
    /// # Examples
    /// ```rust
    /// # use streak_stats::streaks::KvStreaks;
    /// let kv = KvStreaks::decompose(&[2, 1, 3]).unwrap();
    /// assert_eq!(kv.get(2), Some(1));
    /// assert_eq!(kv.get(1), Some(2));
    /// ```
    pub fn decompose(seq: &[i64]) -> StreakResult<Self> {
        validate_distinct(seq)?;
        let mut kv_streaks: BTreeMap<i64, usize> = BTreeMap::new();
        let Some((&first, rest)) = seq.split_first() else {
            return Ok(KvStreaks { kv_streaks });
        };

        let mut leader = first;
        let mut length: usize = 1;
        for &value in rest {
            if value > leader {
                length += 1;
            } else {
                kv_streaks.insert(leader, length);
                leader = value;
                length = 1;
            }
        }
        kv_streaks.insert(leader, length);

        Ok(KvStreaks { kv_streaks })
    }

    /// Length of the streak led by `leader`, if any.
    pub fn get(&self, leader: i64) -> Option<usize> {
        self.kv_streaks.get(&leader).copied()
    }

    /// Number of streaks.
    pub fn len(&self) -> usize {
        self.kv_streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kv_streaks.is_empty()
    }

    /// `(leader, length)` pairs in ascending leader order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.kv_streaks.iter().map(|(&leader, &length)| (leader, length))
    }

    /// Sum of all streak lengths; equals the input length.
    pub fn total_length(&self) -> usize {
        self.kv_streaks.values().sum()
    }

    pub fn as_map(&self) -> &BTreeMap<i64, usize> {
        &self.kv_streaks
    }

    pub fn into_map(self) -> BTreeMap<i64, usize> {
        self.kv_streaks
    }
}

impl std::fmt::Display for KvStreaks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KvStreaks({:?})", self.kv_streaks)
    }
}

/// `(leader, length)` of the first streak of `seq`, or `None` when empty.
///
/// Scans only up to the first streak boundary after validating the whole
/// input for distinctness.
///
/// # Errors
/// - `StreakError::DuplicateElement` if `seq` repeats a value.
pub fn first_kv_streak(seq: &[i64]) -> StreakResult<Option<(i64, usize)>> {
    validate_distinct(seq)?;
    let Some((&leader, rest)) = seq.split_first() else {
        return Ok(None);
    };
    let length = 1 + rest.iter().take_while(|&&value| value > leader).count();
    Ok(Some((leader, length)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutations::enumerate_permutations;
    use crate::streaks::errors::StreakError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The reference decompositions for small hand-written inputs, for both
    //   the ordered and compact views and for `first_kv_streak`.
    // - Reconstruction: flattening a decomposition returns the input.
    // - Agreement between the ordered and compact scans on every permutation
    //   of {1..n} for n ≤ 7, and on a few non-permutation inputs.
    // - Rejection of repeated values by every entry point.
    //
    // They intentionally DO NOT cover:
    // - Aggregate statistics over permutations; see `statistics::streak_stats`.
    // -------------------------------------------------------------------------

    fn nested(seq: &[i64]) -> Vec<Vec<i64>> {
        Streaks::decompose(seq).expect("distinct input").to_nested()
    }

    fn kv(pairs: &[(i64, usize)]) -> BTreeMap<i64, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify the ordered decomposition on the reference examples.
    //
    // Given
    // -----
    // - `[]`, `[1]`, `[1,2,3]`, `[3,2,1]`, `[2,1,3]`, `[1,3,2,4]`.
    //
    // Expect
    // ------
    // - The documented streak lists, with `[]` decomposing to zero streaks.
    fn decompose_matches_reference_examples() {
        assert_eq!(nested(&[]), Vec::<Vec<i64>>::new());
        assert_eq!(nested(&[1]), vec![vec![1]]);
        assert_eq!(nested(&[1, 2, 3]), vec![vec![1, 2, 3]]);
        assert_eq!(nested(&[3, 2, 1]), vec![vec![3], vec![2], vec![1]]);
        assert_eq!(nested(&[2, 1, 3]), vec![vec![2], vec![1, 3]]);
        assert_eq!(nested(&[1, 3, 2, 4]), vec![vec![1, 3, 2, 4]]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the compact decomposition on the reference examples.
    //
    // Given
    // -----
    // - The same inputs as the ordered reference test.
    //
    // Expect
    // ------
    // - `{}`, `{1:1}`, `{1:3}`, `{3:1,2:1,1:1}`, `{2:1,1:2}`, `{1:4}`.
    fn kv_decompose_matches_reference_examples() {
        let cases: [(&[i64], BTreeMap<i64, usize>); 6] = [
            (&[], kv(&[])),
            (&[1], kv(&[(1, 1)])),
            (&[1, 2, 3], kv(&[(1, 3)])),
            (&[3, 2, 1], kv(&[(3, 1), (2, 1), (1, 1)])),
            (&[2, 1, 3], kv(&[(2, 1), (1, 2)])),
            (&[1, 3, 2, 4], kv(&[(1, 4)])),
        ];

        for (seq, expected) in cases {
            let actual = KvStreaks::decompose(seq).expect("distinct input");
            assert_eq!(actual.as_map(), &expected, "compact mismatch for {seq:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `first_kv_streak` on the reference examples.
    //
    // Given
    // -----
    // - The same inputs as the ordered reference test.
    //
    // Expect
    // ------
    // - `None`, `(1,1)`, `(1,3)`, `(3,1)`, `(2,1)`, `(1,4)`.
    fn first_kv_streak_matches_reference_examples() {
        assert_eq!(first_kv_streak(&[]), Ok(None));
        assert_eq!(first_kv_streak(&[1]), Ok(Some((1, 1))));
        assert_eq!(first_kv_streak(&[1, 2, 3]), Ok(Some((1, 3))));
        assert_eq!(first_kv_streak(&[3, 2, 1]), Ok(Some((3, 1))));
        assert_eq!(first_kv_streak(&[2, 1, 3]), Ok(Some((2, 1))));
        assert_eq!(first_kv_streak(&[1, 3, 2, 4]), Ok(Some((1, 4))));
    }

    #[test]
    // Purpose
    // -------
    // Check that flattening recovers the input and that the ordered and
    // compact scans agree, over every permutation of {1..n} for n ≤ 7.
    //
    // Given
    // -----
    // - All n! permutations for n = 1..=7.
    //
    // Expect
    // ------
    // - `flatten()` equals the permutation.
    // - `to_kv()` equals `KvStreaks::decompose` on the same input.
    // - `first_kv_streak` equals the first (leader, length) of the ordered
    //   decomposition.
    fn ordered_and_compact_agree_on_all_small_permutations() {
        for n in 1..=7 {
            for perm in enumerate_permutations(n) {
                // Act
                let ordered = Streaks::decompose(&perm).expect("permutation is distinct");
                let compact = KvStreaks::decompose(&perm).expect("permutation is distinct");
                let first = first_kv_streak(&perm).expect("permutation is distinct");

                // Assert
                assert_eq!(ordered.flatten(), perm, "reconstruction failed for {perm:?}");
                assert_eq!(ordered.to_kv(), compact, "views disagree for {perm:?}");
                assert_eq!(compact.total_length(), perm.len());
                let head = ordered.iter().next().map(|s| (s.as_slice()[0], s.len()));
                assert_eq!(first, head, "first streak mismatch for {perm:?}");
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the decomposition is not specific to {1..n}: negative and
    // sparse values decompose and reconstruct the same way.
    //
    // Given
    // -----
    // - `[10, -4, 7, -9, 0, 100, -20]`.
    //
    // Expect
    // ------
    // - Streaks `[10]`, `[-4, 7]`, `[-9, 0, 100]`, `[-20]`; leaders strictly
    //   decrease; compact view agrees.
    fn decompose_handles_arbitrary_distinct_integers() {
        // Arrange
        let seq = [10_i64, -4, 7, -9, 0, 100, -20];

        // Act
        let ordered = Streaks::decompose(&seq).expect("distinct input");
        let compact = KvStreaks::decompose(&seq).expect("distinct input");

        // Assert
        assert_eq!(ordered.to_nested(), vec![vec![10], vec![-4, 7], vec![-9, 0, 100], vec![-20]]);
        assert_eq!(ordered.leaders(), vec![10, -4, -9, -20]);
        assert_eq!(ordered.lengths(), vec![1, 2, 3, 1]);
        assert_eq!(ordered.to_kv(), compact);
        assert_eq!(ordered.flatten(), seq.to_vec());
    }

    #[test]
    // Purpose
    // -------
    // Verify that every entry point rejects a repeated value instead of
    // returning a decomposition.
    //
    // Given
    // -----
    // - `[1, 2, 1]`.
    //
    // Expect
    // ------
    // - `DuplicateElement { index: 2, value: 1 }` from all three functions.
    fn entry_points_reject_duplicates() {
        // Arrange
        let seq = [1_i64, 2, 1];
        let expected = StreakError::DuplicateElement { index: 2, value: 1 };

        // Act / Assert
        assert_eq!(Streaks::decompose(&seq), Err(expected.clone()));
        assert_eq!(KvStreaks::decompose(&seq), Err(expected.clone()));
        assert_eq!(first_kv_streak(&seq), Err(expected));
    }

    #[test]
    // Purpose
    // -------
    // Check the `Display` renderings used in diagnostics.
    //
    // Given
    // -----
    // - `[2, 1, 3]`.
    //
    // Expect
    // ------
    // - `Streaks(Streak([2]), Streak([1, 3]))` and `KvStreaks({1: 2, 2: 1})`.
    fn display_renders_nested_views() {
        // Arrange
        let seq = [2_i64, 1, 3];

        // Act
        let ordered = Streaks::decompose(&seq).expect("distinct input").to_string();
        let compact = KvStreaks::decompose(&seq).expect("distinct input").to_string();

        // Assert
        assert_eq!(ordered, "Streaks(Streak([2]), Streak([1, 3]))");
        assert_eq!(compact, "KvStreaks({1: 2, 2: 1})");
    }
}
