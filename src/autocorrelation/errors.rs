//! autocorrelation::errors — error types for ACF / IAT estimation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the autocorrelation
//! estimators, together with a conversion layer to Python exceptions for
//! the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`ACFResult`] and [`ACFError`] as the canonical result and error
//!   types for [`autocorr`](super::acf::autocorr),
//!   [`integrated_autocorr`](super::iat::integrated_autocorr) and their
//!   validation helpers.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<ACFError> for PyErr` to surface failures as
//!   `ValueError` at the Python boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only *configuration* and *shape* problems are errors. Numerical
//!   degeneracy (zero-variance series, NaN/±∞ inputs) is never reported
//!   here; it propagates as NaN/±∞ inside the returned arrays.
//! - `ACFError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the domain constraint that failed
//!   ("time axis must be non-empty") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` output embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ACFResult<T> = Result<T, ACFError>;

/// ACFError — error conditions for autocorrelation estimation.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The time axis has zero length, so neither a mean nor a lag-0
///   autocovariance exists.
/// - `UnsupportedWindow { detail, reason }`
///   The window specification is neither automatic, a scalar, nor a
///   per-dimension list matching the number of dimensions.
/// - `InvalidAxis { axis, ndim }`
///   The requested time axis does not exist on the input array.
/// - `UnsupportedShape { ndim }`
///   The IAT estimator only accepts `(n,)` or `(n, d)` inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ACFError {
    // ---- Series shape ----
    EmptySeries,
    InvalidAxis { axis: usize, ndim: usize },
    UnsupportedShape { ndim: usize },

    // ---- Configuration ----
    UnsupportedWindow { detail: String, reason: &'static str },
}

impl std::error::Error for ACFError {}

impl std::fmt::Display for ACFError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ACFError::EmptySeries => {
                write!(f, "Empty series: the time axis must contain at least one sample.")
            }
            ACFError::InvalidAxis { axis, ndim } => {
                write!(f, "Invalid axis {axis} for an array with {ndim} dimension(s).")
            }
            ACFError::UnsupportedShape { ndim } => write!(
                f,
                "Unsupported input with {ndim} dimension(s). Expected (n_samples,) or \
                 (n_samples, n_dims)."
            ),
            ACFError::UnsupportedWindow { detail, reason } => {
                write!(f, "Unsupported window specification {detail}: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ACFError> for PyErr {
    fn from(err: ACFError) -> PyErr {
        PyValueError::new_err(format!("ACFError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for every ACFError variant.
    //
    // They intentionally DO NOT cover:
    // - The `From<ACFError> for PyErr` conversion, which needs the Python
    //   C API and belongs to Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::EmptySeries` has a non-empty message that
    // names the problem.
    //
    // Given
    // -----
    // - An `ACFError::EmptySeries` value.
    //
    // Expect
    // ------
    // - The message is non-empty and mentions "Empty series".
    fn acf_error_empty_series_has_descriptive_message() {
        // Arrange
        let err = ACFError::EmptySeries;

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("Empty series"), "unexpected message: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::InvalidAxis` embeds both the axis and the
    // dimensionality in its message.
    //
    // Given
    // -----
    // - `InvalidAxis { axis: 7, ndim: 2 }`.
    //
    // Expect
    // ------
    // - The message contains "7" and "2".
    fn acf_error_invalid_axis_includes_payload_in_display() {
        // Arrange
        let err = ACFError::InvalidAxis { axis: 7, ndim: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7') && msg.contains('2'), "unexpected message: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::UnsupportedWindow` reports the offending
    // specification and the reason.
    //
    // Given
    // -----
    // - A window detail "[3, 4, 5]" and a fixed reason string.
    //
    // Expect
    // ------
    // - Both strings appear in the message.
    fn acf_error_unsupported_window_includes_detail_and_reason() {
        // Arrange
        let err = ACFError::UnsupportedWindow {
            detail: "[3, 4, 5]".to_string(),
            reason: "expected one window per dimension",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("[3, 4, 5]"), "missing detail: {msg}");
        assert!(msg.contains("one window per dimension"), "missing reason: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::UnsupportedShape` reports the dimensionality.
    //
    // Given
    // -----
    // - `UnsupportedShape { ndim: 3 }`.
    //
    // Expect
    // ------
    // - The message contains "3".
    fn acf_error_unsupported_shape_includes_ndim() {
        // Arrange
        let err = ACFError::UnsupportedShape { ndim: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3'), "unexpected message: {msg}");
    }
}
