//! streaks — streak decomposition of integer sequences.
//!
//! Purpose
//! -------
//! Decompose a sequence of distinct integers into maximal *streaks*, runs
//! headed by their own minimum (the *leader*). This subtree is the leaf of
//! the crate: it has no dependency on enumeration or aggregation.
//!
//! Key behaviors
//! -------------
//! - [`Streaks::decompose`] returns the ordered decomposition as a list of
//!   [`Streak`] values whose concatenation is the input.
//! - [`KvStreaks::decompose`] returns the compact leader → length view.
//! - [`first_kv_streak`] returns only the first `(leader, length)` pair.
//! - [`validate_distinct`] is the shared guard every entry point runs first.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs with a repeated value are rejected with
//!   [`StreakError::DuplicateElement`]; no partial result is produced.
//! - A [`Streak`] can only be built through its fallible constructor, so the
//!   leader-is-minimum invariant holds for every value in circulation.
//!
//! Conventions
//! -----------
//! - Elements are `i64`; indices reported in errors are 0-based.
//! - The empty sequence decomposes into zero streaks.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use streak_stats::streaks::{KvStreaks, Streaks};
//!
//! let ordered = Streaks::decompose(&[3, 1, 4, 2])?;
//! assert_eq!(ordered.to_nested(), vec![vec![3], vec![1, 4, 2]]);
//! assert_eq!(ordered.to_kv(), KvStreaks::decompose(&[3, 1, 4, 2])?);
//! # Ok::<(), streak_stats::streaks::StreakError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - `decompose` tests compare both views against the reference examples and
//!   against each other on every permutation of {1..n}, n ≤ 7.

pub mod decompose;
pub mod errors;
pub mod streak;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::decompose::{KvStreaks, Streaks, first_kv_streak};
pub use self::errors::{StreakError, StreakResult};
pub use self::streak::Streak;
pub use self::validation::validate_distinct;

pub mod prelude {
    pub use super::decompose::{KvStreaks, Streaks, first_kv_streak};
    pub use super::errors::{StreakError, StreakResult};
    pub use super::streak::Streak;
}
