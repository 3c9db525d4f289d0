//! Python argument conversion helpers for the PyO3 surface.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

/// Convert a 1-D `int64` numpy array, a pandas Series (via `to_numpy`), or a
/// Python sequence of ints into an owned `Vec<i64>`.
///
/// Contiguous arrays are copied directly; anything else falls back to
/// element-wise extraction.
///
/// # Errors
/// - `TypeError` if `raw_data` is none of the accepted shapes.
#[cfg(feature = "python-bindings")]
pub fn extract_i64_vec<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Vec<i64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.to_vec());
        }
        return Ok(arr_ro.as_array().to_vec());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            return Ok(series_ro.as_array().to_vec());
        }
    }

    raw_data.extract::<Vec<i64>>().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of int64")
    })
}
