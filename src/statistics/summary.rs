//! statistics::summary — summary row/column and zero/non-zero transforms.
//!
//! Purpose
//! -------
//! Provide the matrix transforms used to turn a raw count matrix into its
//! marginal sums, and to build the complement (missing-length) matrix. They
//! are generic over element type and dimensionality so they can be tested
//! independently of the aggregation engine.
//!
//! Key behaviors
//! -------------
//! - [`add_summary_row_column`]: row 0 ← column sums of the body, column 0 ←
//!   row sums of the body, `[0, 0]` ← grand total of the body. The body
//!   (`[1.., 1..]`) is copied unchanged. Whatever was in row 0 / column 0 is
//!   discarded.
//! - [`summarize`]: strict variant for integer counts. Rejects a matrix whose
//!   row 0 or column 0 holds anything but zero, then applies
//!   [`add_summary_row_column`] and cross-checks the grand total.
//! - [`invert_zeros_and_nonzeros`]: maps each cell to `1` if it is zero and
//!   `0` otherwise.
//! - [`create_array_from_kv`]: scatters `(key, value)` pairs into a dense
//!   1-D array.
//!
//! Invariants & assumptions
//! ------------------------
//! - Row 0 and column 0 ([`SUM`]) are reserved summary slots; the body starts
//!   at index 1 on both axes.
//! - Matrices with a single row or a single column carry no body and are
//!   returned unchanged (as a copy) by both summary transforms.
//! - Re-applying [`add_summary_row_column`] to its own output reproduces that
//!   output: the summary slots never feed into the sums. Re-applying
//!   [`summarize`] to its own output fails with
//!   `MatrixError::SummarySlotsOccupied`, so an already-summarized matrix is
//!   never silently accepted as a fresh count matrix.
//!
//! Conventions
//! -----------
//! - Shape errors are reported at runtime: inputs are accepted at any
//!   dimensionality and rejected with `MatrixError::NotTwoDimensional` unless
//!   they are 2-D.
//! - Non-numeric element types do not satisfy the `num_traits` bounds and are
//!   rejected at compile time; a floating-point NaN is the one runtime
//!   "not a number" and is rejected by [`invert_zeros_and_nonzeros`].

use std::fmt::Display;
use std::ops::Add;

use ndarray::{Array, Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Dimension, Ix2, s};
use num_traits::{PrimInt, Zero};

use crate::statistics::errors::{MatrixError, MatrixResult};

/// Index of the summary row and of the summary column.
pub const SUM: usize = 0;

/// Add a summary row and column to a 2-D array.
///
/// Parameters
/// ----------
/// - `arr`: `&ArrayBase<S, D>`
///   Array of any dimensionality; must be 2-D to succeed.
///
/// Returns
/// -------
/// `MatrixResult<Array2<A>>`
///   A new matrix of the same shape where
///   - `result[[0, j]] = Σ_{i≥1} arr[[i, j]]` for `j ≥ 1`,
///   - `result[[i, 0]] = Σ_{j≥1} arr[[i, j]]` for `i ≥ 1`,
///   - `result[[0, 0]] = Σ_{i≥1, j≥1} arr[[i, j]]`,
///   - `result[[i, j]] = arr[[i, j]]` for `i, j ≥ 1`.
///
///   A matrix with at most one row or one column is returned as a copy.
///
/// Errors
/// ------
/// - `MatrixError::NotTwoDimensional` if `arr.ndim() != 2`.
///
/// Notes
/// -----
/// - Existing values in row 0 and column 0 are ignored, so stale summaries
///   are overwritten rather than accumulated. Use [`summarize`] when a
///   non-zero slot should be treated as an error.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use streak_stats::statistics::summary::add_summary_row_column;
/// let arr = array![[0, 0, 0], [0, 1, 2], [0, 3, 4]];
/// let summarized = add_summary_row_column(&arr).unwrap();
/// assert_eq!(summarized, array![[10, 4, 6], [3, 1, 2], [7, 3, 4]]);
/// ```
pub fn add_summary_row_column<A, S, D>(arr: &ArrayBase<S, D>) -> MatrixResult<Array2<A>>
where
    A: Clone + Zero + Add<Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let matrix = as_matrix(arr)?;
    let (rows, cols) = matrix.dim();
    if rows <= 1 || cols <= 1 {
        return Ok(matrix.to_owned());
    }

    let body = matrix.slice(s![1.., 1..]);
    let mut result: Array2<A> = Array2::zeros((rows, cols));
    result.slice_mut(s![1.., 1..]).assign(&body);
    result.slice_mut(s![SUM, 1..]).assign(&body.sum_axis(Axis(0)));
    result.slice_mut(s![1.., SUM]).assign(&body.sum_axis(Axis(1)));
    result[[SUM, SUM]] = body.sum();
    Ok(result)
}

/// Strictly summarize an integer count matrix.
///
/// Checks that row 0 and column 0 are all zero, applies
/// [`add_summary_row_column`], and verifies that the sum of the row sums,
/// the sum of the column sums and the corner cell agree.
///
/// # Errors
/// - `MatrixError::NotTwoDimensional` if `arr.ndim() != 2`.
/// - `MatrixError::SummarySlotsOccupied` for the first non-zero slot found
///   (row 0 scanned before column 0).
/// - `MatrixError::TotalMismatch` if the grand totals disagree.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use streak_stats::statistics::summary::summarize;
/// let counts = array![[0_u64, 0, 0], [0, 1, 2], [0, 3, 4]];
/// let summarized = summarize(&counts).unwrap();
/// assert_eq!(summarized[[0, 0]], 10);
/// assert!(summarize(&summarized).is_err());
/// ```
pub fn summarize<A, S, D>(arr: &ArrayBase<S, D>) -> MatrixResult<Array2<A>>
where
    A: PrimInt + Display,
    S: Data<Elem = A>,
    D: Dimension,
{
    let matrix = as_matrix(arr)?;
    let (rows, cols) = matrix.dim();
    if rows <= 1 || cols <= 1 {
        return Ok(matrix.to_owned());
    }

    if let Some(col) = matrix.row(SUM).iter().position(|v| !v.is_zero()) {
        return Err(MatrixError::SummarySlotsOccupied { row: SUM, col });
    }
    if let Some(row) = matrix.column(SUM).iter().position(|v| !v.is_zero()) {
        return Err(MatrixError::SummarySlotsOccupied { row, col: SUM });
    }

    let summarized = add_summary_row_column(&matrix)?;
    let by_rows: A = summarized.slice(s![1.., SUM]).sum();
    let by_cols: A = summarized.slice(s![SUM, 1..]).sum();
    if by_rows != by_cols || by_rows != summarized[[SUM, SUM]] {
        return Err(MatrixError::TotalMismatch {
            by_rows: by_rows.to_string(),
            by_cols: by_cols.to_string(),
        });
    }
    Ok(summarized)
}

/// Map every cell to `1` if it is zero and `0` otherwise.
///
/// Accepts arrays of any dimensionality and preserves the shape.
///
/// # Errors
/// - `MatrixError::NonNumericCell` if a cell is not equal to itself (a
///   floating-point NaN); `position` is its row-major offset.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use streak_stats::statistics::summary::invert_zeros_and_nonzeros;
/// let arr = array![[0, 1, 0], [1, 0, 1]];
/// let inverted = invert_zeros_and_nonzeros(&arr).unwrap();
/// assert_eq!(inverted, array![[1_u64, 0, 1], [0, 1, 0]]);
/// ```
pub fn invert_zeros_and_nonzeros<A, S, D>(arr: &ArrayBase<S, D>) -> MatrixResult<Array<u64, D>>
where
    A: Zero + PartialEq,
    S: Data<Elem = A>,
    D: Dimension,
{
    if let Some(position) = arr.iter().position(is_not_a_number) {
        return Err(MatrixError::NonNumericCell { position });
    }
    Ok(arr.map(|v| u64::from(v.is_zero())))
}

/// Build a dense array with `arr[keys[i]] = vals[i]` and zeros elsewhere.
///
/// The result has length `max(keys) + 1`; an empty input yields an empty
/// array. A repeated key keeps its last value.
///
/// # Errors
/// - `MatrixError::LengthMismatch` if `keys.len() != vals.len()`.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use streak_stats::statistics::summary::create_array_from_kv;
/// let arr = create_array_from_kv(&[3, 1], &[7, 2]).unwrap();
/// assert_eq!(arr, array![0, 2, 0, 7]);
/// ```
pub fn create_array_from_kv(keys: &[usize], vals: &[u64]) -> MatrixResult<Array1<u64>> {
    if keys.len() != vals.len() {
        return Err(MatrixError::LengthMismatch { keys: keys.len(), vals: vals.len() });
    }
    let Some(&max_key) = keys.iter().max() else {
        return Ok(Array1::zeros(0));
    };

    let mut arr: Array1<u64> = Array1::zeros(max_key + 1);
    for (&key, &val) in keys.iter().zip(vals) {
        arr[key] = val;
    }
    Ok(arr)
}

// ---- Helper Methods ----

fn as_matrix<A, S, D>(arr: &ArrayBase<S, D>) -> MatrixResult<ArrayView2<'_, A>>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let ndim = arr.ndim();
    arr.view().into_dimensionality::<Ix2>().map_err(|_| MatrixError::NotTwoDimensional { ndim })
}

// NaN is the only value that is not equal to itself.
#[allow(clippy::eq_op)]
fn is_not_a_number<A: PartialEq>(value: &A) -> bool {
    value != value
}
