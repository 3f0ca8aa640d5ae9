//! rust_autocorr — FFT autocorrelation and integrated autocorrelation time.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the autocorrelation estimators to Python via the `_rust_autocorr` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing functions, the `IntegratedAutocorr` class and the
//! `autocorrelation` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`autocorrelation`) as the public crate
//!   surface.
//! - Define `#[pyfunction]`/`#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer for the `_rust_autocorr` Python extension.
//! - Register the `autocorrelation` submodule under `rust_autocorr` in
//!   `sys.modules` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work happens in [`autocorrelation`]; this file performs
//!   only FFI glue, argument conversion, and error mapping.
//! - Python inputs are converted to float64 arrays before reaching the
//!   estimators; the estimators never see Python objects.
//!
//! Conventions
//! -----------
//! - `autocorr(x, axis=0)` returns an array of the same shape as `x`.
//! - `integrated_autocorr(x, window=None)` returns a 1-D array with one τ_int
//!   per dimension; `window` may be `None`, an int, or a sequence of ints.
//! - Errors from core Rust code surface as `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`autocorrelation`] and can
//!   ignore the items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_autocorr` and wraps its
//!   functions in user-facing Python APIs.

pub mod autocorrelation;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Axis;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArrayDyn};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    autocorrelation::{IATOptions, IATOutcome},
    utils::{extract_f64_array_dyn, extract_window},
};

/// Normalized autocorrelation function of `x` along `axis`.
///
/// Python signature: `autocorr(x, /, axis=0) -> numpy.ndarray`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "autocorr", signature = (x, axis = 0), text_signature = "(x, /, axis=0)")]
pub fn py_autocorr<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, axis: usize,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let arr = extract_f64_array_dyn(py, x)?;
    let acf = autocorrelation::autocorr(&arr.as_array(), Axis(axis))?;
    Ok(acf.into_pyarray(py))
}

/// Integrated autocorrelation time of each dimension of `x`.
///
/// Python signature: `integrated_autocorr(x, /, window=None) -> numpy.ndarray`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "integrated_autocorr",
    signature = (x, window = None),
    text_signature = "(x, /, window=None)"
)]
pub fn py_integrated_autocorr<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, window: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let window = extract_window(window)?;
    let arr = extract_f64_array_dyn(py, x)?;
    let tau = autocorrelation::integrated_autocorr(&arr.as_array(), window)?;
    Ok(tau.into_pyarray(py))
}

/// IntegratedAutocorr — Python-facing wrapper around [`IATOutcome`].
///
/// Purpose
/// -------
/// Give Python callers the per-dimension diagnostics of the IAT estimator,
/// not only τ_int itself.
///
/// Parameters
/// ----------
/// Constructed from Python via `IntegratedAutocorr(x, window=None, verbose=False)`:
/// - `x`: `&PyAny`
///   `(n,)` or `(n, d)` array-like of float64 samples with `n ≥ 1`.
/// - `window`: `None | int | Sequence[int]`
///   Truncation window; see [`crate::autocorrelation::Window`].
/// - `verbose`: `bool`
///   Emit terminal diagnostics when built with `obs_slog`.
///
/// Fields
/// ------
/// - `inner`: [`IATOutcome`]
///   Rust-side outcome used by the accessors.
///
/// Performance
/// -----------
/// - At most one copy of the Python data is made during conversion; getters
///   copy only `d` values.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_autocorr.autocorrelation")]
pub struct IntegratedAutocorr {
    inner: IATOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl IntegratedAutocorr {
    #[new]
    #[pyo3(
        text_signature = "(x, /, window=None, verbose=False)",
        signature = (x, window = None, verbose = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, window: Option<&Bound<'py, PyAny>>,
        verbose: bool,
    ) -> PyResult<IntegratedAutocorr> {
        let opts = IATOptions::new(extract_window(window)?, verbose);
        let arr = extract_f64_array_dyn(py, x)?;
        let inner = IATOutcome::estimate(&arr.as_array(), &opts)?;
        Ok(IntegratedAutocorr { inner })
    }

    /// τ_int per dimension.
    #[getter]
    pub fn tau_int(&self) -> Vec<f64> {
        self.inner.tau_int().to_vec()
    }

    /// Window actually used per dimension, after clamping to the series length.
    #[getter]
    pub fn windows(&self) -> Vec<usize> {
        self.inner.windows().to_vec()
    }

    /// Whether the automatic window found a negative ACF value, per dimension.
    #[getter]
    pub fn crossed_zero(&self) -> Vec<bool> {
        self.inner.crossed_zero()
    }

    #[getter]
    pub fn effective_sample_size(&self) -> Vec<f64> {
        self.inner.effective_sample_size().to_vec()
    }

    #[getter]
    pub fn n_samples(&self) -> usize {
        self.inner.n_samples()
    }
}

/// _rust_autocorr — PyO3 module initializer for the Python extension.
///
/// Creates the `autocorrelation` submodule, attaches it to `_rust_autocorr`
/// and registers it in `sys.modules` as `rust_autocorr.autocorrelation`.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_autocorr<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let autocorrelation_mod = PyModule::new(_py, "autocorrelation")?;
    autocorrelation_functions(_py, m, &autocorrelation_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_autocorr.autocorrelation", autocorrelation_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn autocorrelation_functions<'py>(
    _py: Python, rust_autocorr: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_autocorr, m)?)?;
    m.add_function(wrap_pyfunction!(py_integrated_autocorr, m)?)?;
    m.add_class::<IntegratedAutocorr>()?;
    rust_autocorr.add_submodule(m)?;
    Ok(())
}
