//! Errors for matrix summary transforms and streak statistics.
//!
//! This module defines a matrix error type, [`MatrixError`], raised by the
//! summary/inversion transforms in `statistics::summary`, and a statistics
//! error type, [`StatsError`], raised by [`StreakStatistics`] construction,
//! lookups, options and sampling. Both implement `Display`/`Error` and convert
//! to `PyErr` when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based**; row/column 0 of a count matrix are the summary
//!   slots.
//! - Streak lengths and streak counts are **1-based** (a permutation of
//!   `{1..n}` has lengths and counts in `1..=n`).
//! - Lower-level failures ([`StreakError`], [`MatrixError`]) are wrapped into
//!   [`StatsError`] via `From`, so `?` composes across subtrees.
//!
//! [`StreakStatistics`]: crate::statistics::StreakStatistics
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::streaks::errors::StreakError;

/// Result alias for matrix transforms that may produce [`MatrixError`].
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result alias for statistics operations that may produce [`StatsError`].
pub type StatsResult<T> = Result<T, StatsError>;

/// Shape, type and invariant failures of the matrix transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    // ---- Shape ----
    /// Summary transforms require a 2-D array.
    NotTwoDimensional { ndim: usize },

    /// Scatter inputs must have equal lengths.
    LengthMismatch { keys: usize, vals: usize },

    // ---- Type ----
    /// A cell does not hold a number (a floating-point NaN); `position` is
    /// the cell's offset in logical row-major order.
    NonNumericCell { position: usize },

    // ---- Summary invariants ----
    /// Strict summarization requires row 0 and column 0 to be all zero.
    SummarySlotsOccupied { row: usize, col: usize },

    /// Row-sum and column-sum grand totals disagree.
    TotalMismatch { by_rows: String, by_cols: String },
}

impl std::error::Error for MatrixError {}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            MatrixError::NotTwoDimensional { ndim } => {
                write!(f, "Input array must be 2-dimensional; got {ndim} dimension(s).")
            }
            MatrixError::LengthMismatch { keys, vals } => {
                write!(f, "keys and vals must have the same length; got {keys} and {vals}.")
            }
            // ---- Type ----
            MatrixError::NonNumericCell { position } => {
                write!(f, "Input array must be numeric; cell at position {position} is not a number.")
            }
            // ---- Summary invariants ----
            MatrixError::SummarySlotsOccupied { row, col } => {
                write!(
                    f,
                    "Summary row and column must be all zero before summarizing; cell [{row}, {col}] is not."
                )
            }
            MatrixError::TotalMismatch { by_rows, by_cols } => {
                write!(
                    f,
                    "Grand total cross-check failed: sum of row sums {by_rows} != sum of column sums {by_cols}."
                )
            }
        }
    }
}

/// Unified error type for streak statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    // ---- Domain ----
    /// Statistics need a non-empty domain, n ≥ 1.
    EmptyDomain,

    /// n! does not fit in `usize`, so the count matrix cannot be indexed.
    DomainTooLarge { n: usize },

    // ---- Lookups ----
    /// Streak length outside 1..=n.
    LengthOutOfRange { length: usize, n: usize },

    /// Streak count outside 1..=n.
    CountOutOfRange { count: usize, n: usize },

    // ---- Options ----
    /// Monte-Carlo sampling needs at least one trial.
    InvalidTrials { trials: usize },

    /// Progress logging interval must be positive when set.
    InvalidProgressInterval,

    // ---- Wrapped ----
    /// Decomposition failure.
    Streak(StreakError),

    /// Matrix transform failure.
    Matrix(MatrixError),
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Streak(err) => Some(err),
            StatsError::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Domain ----
            StatsError::EmptyDomain => {
                write!(f, "Domain size n must be at least 1.")
            }
            StatsError::DomainTooLarge { n } => {
                write!(f, "Domain size n = {n} is too large: n! overflows the permutation index.")
            }
            // ---- Lookups ----
            StatsError::LengthOutOfRange { length, n } => {
                write!(f, "Streak length {length} is out of range; must satisfy 1 ≤ length ≤ {n}.")
            }
            StatsError::CountOutOfRange { count, n } => {
                write!(f, "Streak count {count} is out of range; must satisfy 1 ≤ count ≤ {n}.")
            }
            // ---- Options ----
            StatsError::InvalidTrials { trials } => {
                write!(f, "Number of trials must be positive; got {trials}.")
            }
            StatsError::InvalidProgressInterval => {
                write!(f, "Progress interval must be positive when set.")
            }
            // ---- Wrapped ----
            StatsError::Streak(err) => write!(f, "Streak error: {err}"),
            StatsError::Matrix(err) => write!(f, "Matrix error: {err}"),
        }
    }
}

impl From<StreakError> for StatsError {
    fn from(err: StreakError) -> StatsError {
        StatsError::Streak(err)
    }
}

impl From<MatrixError> for StatsError {
    fn from(err: MatrixError) -> StatsError {
        StatsError::Matrix(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<MatrixError> for PyErr {
    fn from(err: MatrixError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatsError> for PyErr {
    fn from(err: StatsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
