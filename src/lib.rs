//! streak_stats — exact streak-decomposition statistics for permutations.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the decomposers and statistics to Python via the `_streaks`
//! extension module. A permutation is split into *streaks*: maximal runs
//! headed by their own minimum. Enumerating all permutations of {1..n} and
//! counting streaks checks closed-form identities (Stirling numbers of the
//! first kind, harmonic numbers, derangements) by brute force.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`streaks`] (decomposition),
//!   [`permutations`] (enumeration and sampling) and [`statistics`]
//!   (aggregation and matrix transforms).
//! - Define `#[pyfunction]`s, the `StreakStats` `#[pyclass]`, and the
//!   `#[pymodule]` initializer for `_streaks` when `python-bindings` is on.
//! - Register the Python submodules (`decomposition`, `statistics`) in
//!   `sys.modules` so that dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All computation lives in the inner modules; this file performs only FFI
//!   glue, argument conversion, and error mapping.
//! - Rust errors are converted to `ValueError` with their `Display` message.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use streak_stats::{statistics::StreakStatistics, streaks::Streaks};
//!
//! let streaks = Streaks::decompose(&[2, 1, 3])?;
//! assert_eq!(streaks.to_nested(), vec![vec![2], vec![1, 3]]);
//!
//! let stats = StreakStatistics::build(4)?;
//! assert_eq!(stats.by_count().to_vec(), vec![6, 11, 6, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   end-to-end tests under `tests/`.
//! - The PyO3 surface is a thin pass-through and is exercised from Python.

pub mod permutations;
pub mod statistics;
pub mod streaks;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::collections::BTreeMap;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistics::{SampleOpts, StatsOptions, StreakStatistics},
    streaks::{KvStreaks, Streaks},
    utils::extract_i64_vec,
};

/// StreakStats — Python-facing wrapper for [`StreakStatistics`].
///
/// Purpose
/// -------
/// Build the exhaustive statistics for permutations of {1..n} once and expose
/// the views as numpy arrays and Python ints.
///
/// Parameters
/// ----------
/// Constructed from Python via `StreakStats(n, verbose=False)`:
/// - `n`: `usize`
///   Domain size, at least 1. Cost grows as `n · n!`.
/// - `verbose`: `bool`
///   Log enumeration progress to stderr (requires the `obs_slog` feature).
///
/// Notes
/// -----
/// - Vector views are indexed from 0 and describe lengths / counts / leaders
///   1..=n, matching the Rust accessors.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "streak_stats.statistics", frozen)]
pub struct StreakStats {
    inner: StreakStatistics,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl StreakStats {
    #[new]
    #[pyo3(signature = (n, verbose = false), text_signature = "(n, /, verbose=False)")]
    pub fn new(n: usize, verbose: bool) -> PyResult<Self> {
        let opts = StatsOptions { verbose, ..StatsOptions::default() };
        let inner = StreakStatistics::build_with(n, &opts)?;
        Ok(StreakStats { inner })
    }

    /// Domain size n.
    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n()
    }

    /// Number of enumerated permutations, n!.
    #[getter]
    pub fn permutation_count(&self) -> usize {
        self.inner.permutation_count()
    }

    /// Mean number of streaks per permutation.
    #[getter]
    pub fn mean_streak_count(&self) -> f64 {
        self.inner.mean_streak_count()
    }

    pub fn by_length<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.by_length().to_owned().into_pyarray(py)
    }

    pub fn by_count<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.by_count().to_owned().into_pyarray(py)
    }

    pub fn missing_streak_lengths<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.missing_streak_lengths().to_owned().into_pyarray(py)
    }

    pub fn by_leader<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.by_leader().to_owned().into_pyarray(py)
    }

    pub fn length_by_leader<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u64>> {
        self.inner.length_by_leader().to_owned().into_pyarray(py)
    }

    #[pyo3(text_signature = "(self, length, /)")]
    pub fn of_length(&self, length: usize) -> PyResult<u64> {
        Ok(self.inner.of_length(length)?)
    }

    #[pyo3(text_signature = "(self, count, /)")]
    pub fn of_count(&self, count: usize) -> PyResult<u64> {
        Ok(self.inner.of_count(count)?)
    }

    pub fn count_matrix<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<u64>> {
        self.inner.count_matrix().clone().into_pyarray(py)
    }

    pub fn complement_matrix<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u64>>> {
        Ok(self.inner.complement_matrix()?.into_pyarray(py))
    }
}

/// Ordered streak decomposition of a sequence of distinct integers.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(seq, /)")]
pub fn find_streaks<'py>(py: Python<'py>, seq: &Bound<'py, PyAny>) -> PyResult<Vec<Vec<i64>>> {
    let seq = extract_i64_vec(py, seq)?;
    Ok(Streaks::decompose(&seq)?.to_nested())
}

/// Compact `{leader: length}` decomposition.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(seq, /)")]
pub fn find_kv_streaks<'py>(
    py: Python<'py>, seq: &Bound<'py, PyAny>,
) -> PyResult<BTreeMap<i64, usize>> {
    let seq = extract_i64_vec(py, seq)?;
    Ok(KvStreaks::decompose(&seq)?.into_map())
}

/// `(leader, length)` of the first streak, or `None` for an empty sequence.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(seq, /)")]
pub fn first_kv_streak<'py>(
    py: Python<'py>, seq: &Bound<'py, PyAny>,
) -> PyResult<Option<(i64, usize)>> {
    let seq = extract_i64_vec(py, seq)?;
    Ok(streaks::first_kv_streak(&seq)?)
}

/// Uniformly random permutation of {1..n}.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (n, seed = None), text_signature = "(n, /, seed=None)")]
pub fn random_permutation<'py>(
    py: Python<'py>, n: usize, seed: Option<u64>,
) -> Bound<'py, PyArray1<i64>> {
    let mut rng = permutations::seeded_rng(seed);
    permutations::random_permutation(n, &mut rng).into_pyarray(py)
}

/// Monte-Carlo mean number of streaks over random permutations of {1..n}.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (n, trials = 100, seed = Some(42)),
    text_signature = "(n, /, trials=100, seed=42)"
)]
pub fn mean_kv_streaks(n: usize, trials: usize, seed: Option<u64>) -> PyResult<f64> {
    let opts = SampleOpts::new(seed, trials)?;
    Ok(statistics::mean_kv_streaks(n, &opts)?)
}

/// `_streaks` — Python extension module initializer.
///
/// Creates the `decomposition` and `statistics` submodules, attaches them to
/// `_streaks`, and registers them in `sys.modules` as
/// `streak_stats.decomposition` and `streak_stats.statistics`.
///
/// Errors
/// ------
/// - `PyErr` if creating submodules or updating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _streaks<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let decomposition_mod = PyModule::new(py, "decomposition")?;
    let statistics_mod = PyModule::new(py, "statistics")?;
    decomposition(m, &decomposition_mod)?;
    statistics_submodule(m, &statistics_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("streak_stats.decomposition", decomposition_mod)?;
    modules.set_item("streak_stats.statistics", statistics_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn decomposition<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_streaks, m)?)?;
    m.add_function(wrap_pyfunction!(find_kv_streaks, m)?)?;
    m.add_function(wrap_pyfunction!(first_kv_streak, m)?)?;
    m.add_function(wrap_pyfunction!(random_permutation, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistics_submodule<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<StreakStats>()?;
    m.add_function(wrap_pyfunction!(mean_kv_streaks, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
