//! streaks::errors — validation errors for streak construction and decomposition.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every decomposition
//! entry point ([`Streaks::decompose`](crate::streaks::Streaks::decompose),
//! [`KvStreaks::decompose`](crate::streaks::KvStreaks::decompose),
//! [`first_kv_streak`](crate::streaks::first_kv_streak)) and by the fallible
//! [`Streak`](crate::streaks::Streak) constructor.
//!
//! Key behaviors
//! -------------
//! - Define [`StreakResult`] and [`StreakError`] as the canonical result and
//!   error types for this subtree.
//! - Attach human-readable `Display` messages that embed the offending value
//!   and position so failures are diagnosable without extra context.
//! - Implement `From<StreakError> for PyErr` when the `python-bindings`
//!   feature is enabled, mapping all variants to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are raised at the point of detection; no decomposition or streak
//!   value is ever partially constructed before an error is returned.
//! - Variants are small and `Clone`, suitable for unit tests and for wrapping
//!   inside higher-level errors (see `statistics::errors::StatsError`).
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` messages embed their payloads.
//! - Decomposition modules exercise these variants through their entry points.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type StreakResult<T> = Result<T, StreakError>;

/// StreakError — validation failures for streaks and decompositions.
///
/// Variants
/// --------
/// - `DuplicateElement { index, value }`
///   The input sequence repeats `value`; `index` is the position of the
///   second occurrence. Decomposition requires pairwise-distinct elements.
/// - `LeaderNotMinimum { leader, minimum }`
///   A streak was constructed whose first element is not the minimum of its
///   members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakError {
    // ---- Input validation ----
    /// Sequence contains a repeated value.
    DuplicateElement { index: usize, value: i64 },

    // ---- Streak invariants ----
    /// First element of a streak is not its minimum.
    LeaderNotMinimum { leader: i64, minimum: i64 },
}

impl std::error::Error for StreakError {}

impl std::fmt::Display for StreakError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreakError::DuplicateElement { index, value } => {
                write!(
                    f,
                    "Sequence must contain distinct elements; value {value} repeats at index {index}."
                )
            }
            StreakError::LeaderNotMinimum { leader, minimum } => {
                write!(
                    f,
                    "Streak leader must be its minimum element; leader {leader}, minimum {minimum}."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StreakError> for PyErr {
    fn from(err: StreakError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for both StreakError variants.
    //
    // They intentionally DO NOT cover:
    // - The `From<StreakError> for PyErr` conversion, which needs the Python
    //   C API and belongs to Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `DuplicateElement` names both the repeated value and the
    // index of the repeat.
    //
    // Given
    // -----
    // - `StreakError::DuplicateElement { index: 4, value: 17 }`.
    //
    // Expect
    // ------
    // - The message contains "17", "4" and the word "distinct".
    fn duplicate_element_display_includes_value_and_index() {
        // Arrange
        let err = StreakError::DuplicateElement { index: 4, value: 17 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("17"), "missing value in message: {msg}");
        assert!(msg.contains("index 4"), "missing index in message: {msg}");
        assert!(msg.contains("distinct"), "missing constraint in message: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LeaderNotMinimum` embeds the leader and the true minimum.
    //
    // Given
    // -----
    // - `StreakError::LeaderNotMinimum { leader: 5, minimum: -2 }`.
    //
    // Expect
    // ------
    // - The message contains "5" and "-2".
    fn leader_not_minimum_display_includes_payload() {
        // Arrange
        let err = StreakError::LeaderNotMinimum { leader: 5, minimum: -2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("leader 5"), "missing leader in message: {msg}");
        assert!(msg.contains("minimum -2"), "missing minimum in message: {msg}");
    }
}
