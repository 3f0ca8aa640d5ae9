//! autocorrelation::validation — shared input guards for the estimators.
//!
//! Purpose
//! -------
//! Centralize the shape checks performed by the ACF and IAT estimators so
//! that axis bounds, empty series and the `(n,)` → `(n, 1)` reshaping rule
//! are enforced once, consistently.
//!
//! Key behaviors
//! -------------
//! - [`validate_series`] checks that the time axis exists and is non-empty
//!   and returns its length.
//! - [`as_samples_by_dims`] views a 1-D or 2-D input as an `(n, d)` matrix
//!   without copying.
//!
//! Invariants & assumptions
//! ------------------------
//! - Values are *not* checked for finiteness. NaN/±∞ inputs produce
//!   NaN/±∞ outputs rather than errors.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each error branch and the reshaping rule.

use ndarray::{ArrayBase, ArrayView2, Axis, Data, Dimension, Ix1, Ix2};

use crate::autocorrelation::errors::{ACFError, ACFResult};

/// Validate the time axis of `x` and return its length `n`.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, D>`
///   Input series of any dimensionality.
/// - `axis`: `Axis`
///   Time axis; must satisfy `axis < x.ndim()`.
///
/// Returns
/// -------
/// `ACFResult<usize>`
///   The number of samples along `axis` (always ≥ 1 on success).
///
/// Errors
/// ------
/// - `ACFError::InvalidAxis` when `axis.index() >= x.ndim()`.
/// - `ACFError::EmptySeries` when the time axis has length zero.
pub fn validate_series<S, D>(x: &ArrayBase<S, D>, axis: Axis) -> ACFResult<usize>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = x.ndim();
    if axis.index() >= ndim {
        return Err(ACFError::InvalidAxis { axis: axis.index(), ndim });
    }
    let n = x.len_of(axis);
    if n == 0 {
        return Err(ACFError::EmptySeries);
    }
    Ok(n)
}

/// View `x` as an `(n_samples, n_dims)` matrix with time along axis 0.
///
/// A flat `(n,)` series is treated as a single dimension, i.e. viewed as
/// `(n, 1)`. Two-dimensional inputs are returned unchanged.
///
/// Errors
/// ------
/// - `ACFError::UnsupportedShape` for zero- or ≥3-dimensional inputs.
/// - `ACFError::EmptySeries` when `n_samples == 0`.
pub fn as_samples_by_dims<S, D>(x: &ArrayBase<S, D>) -> ACFResult<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = x.ndim();
    let view = x.view().into_dyn();
    let matrix = match ndim {
        1 => view
            .into_dimensionality::<Ix1>()
            .map(|flat| flat.insert_axis(Axis(1)))
            .map_err(|_| ACFError::UnsupportedShape { ndim })?,
        2 => view.into_dimensionality::<Ix2>().map_err(|_| ACFError::UnsupportedShape { ndim })?,
        _ => return Err(ACFError::UnsupportedShape { ndim }),
    };
    validate_series(&matrix, Axis(0))?;
    Ok(matrix)
}
