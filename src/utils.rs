//! utils — conversion helpers for the PyO3 boundary.
//!
//! Only compiled with the `python-bindings` feature. Converts Python array
//! likes and window arguments into the Rust types used by
//! [`crate::autocorrelation`].

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArrayDyn;

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyBytes, PyString},
};

#[cfg(feature = "python-bindings")]
use crate::autocorrelation::{ACFError, Window};

/// Borrow `raw_data` as a read-only float64 array of any dimensionality.
///
/// Accepts numpy arrays directly, objects exposing `to_numpy()` (pandas
/// Series/DataFrame), and anything `numpy.asarray(.., float64)` accepts.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array_dyn<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArrayDyn<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
            return Ok(frame_ro);
        }
    }

    let np = py.import("numpy")?;
    let converted = np.call_method1("asarray", (raw_data, np.getattr("float64")?)).map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a numpy.ndarray, pandas object, or nested sequence of float64",
        )
    })?;
    Ok(converted.extract::<PyReadonlyArrayDyn<f64>>()?)
}

/// Map a Python `window` argument onto [`Window`].
///
/// - `None` (or absent) → [`Window::Auto`]
/// - non-negative integer → [`Window::Fixed`]
/// - sequence of non-negative integers → [`Window::PerDimension`]
///
/// Strings, floats and anything else are rejected with
/// [`ACFError::UnsupportedWindow`].
#[cfg(feature = "python-bindings")]
pub fn extract_window<'py>(window: Option<&Bound<'py, PyAny>>) -> PyResult<Window> {
    let obj = match window {
        Some(obj) if !obj.is_none() => obj,
        _ => return Ok(Window::Auto),
    };
    let detail = obj.repr().map(|r| r.to_string()).unwrap_or_else(|_| "<window>".to_string());

    if obj.is_instance_of::<PyString>() || obj.is_instance_of::<PyBytes>() {
        return Err(ACFError::UnsupportedWindow {
            detail,
            reason: "strings are not window specifications",
        }
        .into());
    }
    if let Ok(w) = obj.extract::<usize>() {
        return Ok(Window::Fixed(w));
    }
    if let Ok(ws) = obj.extract::<Vec<usize>>() {
        return Ok(Window::PerDimension(ws));
    }
    Err(ACFError::UnsupportedWindow {
        detail,
        reason: "expected None, a non-negative integer, or one integer per dimension",
    }
    .into())
}

#[cfg(all(test, feature = "python-bindings"))]
mod tests {
    use super::*;
    use pyo3::exceptions::PyValueError;
    use std::ffi::CStr;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The accepted Python window forms (None, int, sequence of ints).
    // - Rejection of strings, floats, negative ints and mixed sequences as
    //   `ValueError`s carrying the `ACFError` text.
    //
    // They intentionally DO NOT cover:
    // - `extract_f64_array_dyn`, which needs numpy importable in the
    //   embedded interpreter.
    // -------------------------------------------------------------------------

    fn window_from(py: Python<'_>, source: &CStr) -> PyResult<Window> {
        let obj = py.eval(source, None, None)?;
        extract_window(Some(&obj))
    }

    #[test]
    // Purpose
    // -------
    // Verify the mapping of supported Python values onto `Window`.
    //
    // Given
    // -----
    // - No argument, `None`, `7` and `[3, 4]`.
    //
    // Expect
    // ------
    // - `Auto`, `Auto`, `Fixed(7)` and `PerDimension([3, 4])`.
    fn extract_window_maps_supported_forms() {
        Python::initialize();
        Python::attach(|py| {
            assert_eq!(extract_window(None).expect("absent window"), Window::Auto);
            assert_eq!(window_from(py, c"None").expect("None window"), Window::Auto);
            assert_eq!(window_from(py, c"7").expect("int window"), Window::Fixed(7));
            assert_eq!(
                window_from(py, c"[3, 4]").expect("list window"),
                Window::PerDimension(vec![3, 4])
            );
        });
    }

    #[test]
    // Purpose
    // -------
    // Ensure unsupported window values raise a configuration error instead
    // of being coerced.
    //
    // Given
    // -----
    // - `"abc"`, `1.5`, `-2` and `[1, "x"]`.
    //
    // Expect
    // ------
    // - A `ValueError` whose message contains "Unsupported window
    //   specification" for every value.
    fn extract_window_rejects_unsupported_values() {
        Python::initialize();
        Python::attach(|py| {
            for source in [c"'abc'", c"1.5", c"-2", c"[1, 'x']"] {
                let err = window_from(py, source).expect_err("window should be rejected");
                assert!(err.is_instance_of::<PyValueError>(py), "wrong exception for {source:?}");
                let message = err.to_string();
                assert!(
                    message.contains("Unsupported window specification"),
                    "unexpected message for {source:?}: {message}"
                );
            }
        });
    }
}
