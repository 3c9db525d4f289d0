//! permutations::enumerate — lazy lexicographic enumeration of {1..n}.
//!
//! Purpose
//! -------
//! Drive exhaustive statistics by producing every permutation of {1, …, n}
//! exactly once, without materializing all n! permutations in memory.
//!
//! Key behaviors
//! -------------
//! - [`Permutations`] is an `Iterator<Item = Vec<i64>>` that starts at the
//!   identity and steps with the classical next-permutation rule, ending
//!   after the strictly decreasing arrangement.
//! - Enumeration is deterministic and restartable: [`enumerate_permutations`]
//!   can be called any number of times, and [`Permutations::restart`] rewinds
//!   an existing iterator.
//! - [`checked_factorial`] computes n! with overflow detection; callers use it
//!   to size buffers before enumerating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Exactly n! items are produced; `n = 0` yields the single empty
//!   permutation.
//! - Items are yielded in strictly increasing lexicographic order.
//! - Practical only for small n (≈ n ≤ 11 interactively); the iterator does
//!   not cap n, it just takes n! steps.
//!
//! Performance
//! -----------
//! - Amortized O(1) swaps per step plus one O(n) clone for the yielded item.

use std::iter::FusedIterator;

/// Compute `n!`, returning `None` if it overflows `usize`.
///
/// # Examples
/// ```rust
/// # use streak_stats::permutations::checked_factorial;
/// assert_eq!(checked_factorial(0), Some(1));
/// assert_eq!(checked_factorial(5), Some(120));
/// assert_eq!(checked_factorial(100), None);
/// ```
pub fn checked_factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1_usize, |acc, k| acc.checked_mul(k))
}

/// Lazy iterator over all permutations of {1, …, n} in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    n: usize,
    next: Option<Vec<i64>>,
    remaining: Option<usize>,
}

impl Permutations {
    /// Create an iterator positioned at the identity permutation of {1..n}.
    pub fn new(n: usize) -> Self {
        Permutations { n, next: Some(identity(n)), remaining: checked_factorial(n) }
    }

    /// Size of the permuted domain.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of permutations this iterator produces from the start,
    /// or `None` when `n!` does not fit in `usize`.
    pub fn total(&self) -> Option<usize> {
        checked_factorial(self.n)
    }

    /// Rewind to the identity permutation.
    pub fn restart(&mut self) {
        self.next = Some(identity(self.n));
        self.remaining = checked_factorial(self.n);
    }
}

impl Iterator for Permutations {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.remaining, self.next.is_some()) {
            (_, false) => (0, Some(0)),
            (Some(remaining), true) => (remaining, Some(remaining)),
            (None, true) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Permutations {}

/// All permutations of {1, …, n}, lazily, in lexicographic order.
///
/// # Examples
/// ```rust
/// # use streak_stats::permutations::enumerate_permutations;
/// let perms: Vec<Vec<i64>> = enumerate_permutations(3).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![1, 2, 3]);
/// assert_eq!(perms[5], vec![3, 2, 1]);
/// ```
pub fn enumerate_permutations(n: usize) -> Permutations {
    Permutations::new(n)
}

// ---- Helper Methods ----

fn identity(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// Advance `perm` to its lexicographic successor in place.
///
/// Returns `false`, leaving `perm` untouched, when `perm` is already the
/// last (non-increasing) arrangement.
fn next_permutation(perm: &mut [i64]) -> bool {
    let len = perm.len();
    if len < 2 {
        return false;
    }

    // Pivot: rightmost i with perm[i] < perm[i + 1].
    let Some(pivot) = (0..len - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };
    // Rightmost element greater than the pivot; exists because perm[pivot + 1] qualifies.
    let mut swap_with = len - 1;
    while perm[swap_with] <= perm[pivot] {
        swap_with -= 1;
    }
    perm.swap(pivot, swap_with);
    perm[pivot + 1..].reverse();
    true
}
