//! autocorrelation::acf — FFT-based autocorrelation function estimator.
//!
//! Purpose
//! -------
//! Estimate the normalized autocorrelation function (ACF) of a series along
//! a chosen time axis, independently for every other axis, in
//! O(m log m) time per lane via the Wiener–Khinchin relation.
//!
//! Key behaviors
//! -------------
//! - Centre each lane on its own mean so the zero-frequency component does
//!   not dominate the spectrum.
//! - Zero-pad each lane to `m = next_regular(2n)` samples. Any `m ≥ 2n − 1`
//!   keeps the circular correlation produced by the FFT free of wrap-around
//!   terms in lags `0..n`, so the result equals the direct lag sum.
//! - Compute `IFFT(F · conj(F))`, keep the real part of the first `n` lags,
//!   and divide by lag 0 so that `ACF[0] == 1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input is never modified; centring and padding happen in a
//!   per-lane scratch buffer.
//! - Output shape equals input shape; lags run along `axis`.
//! - A zero-variance lane has a lag-0 autocovariance of exactly zero, so its
//!   ACF is NaN (0/0). This is propagated, not intercepted.
//!
//! Conventions
//! -----------
//! - The estimator is the biased (1/n) autocovariance divided by the lag-0
//!   autocovariance; the 1/n factor and the FFT scaling cancel in the ratio.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against a direct O(n²) lag sum, check lag-0
//!   normalization, shift invariance, axis handling and the zero-variance
//!   NaN path.

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Zip};
use rustfft::num_complex::Complex;

use crate::autocorrelation::{
    errors::ACFResult,
    fft::{FftPair, next_regular},
    validation::validate_series,
};

/// Estimate the autocorrelation function of `x` along `axis` using the FFT.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, D>`
///   Series of any dimensionality. Values should be finite; NaN/±∞ give
///   NaN/±∞ results.
/// - `axis`: `Axis`
///   Time axis of `x`. Every other axis is treated as an independent
///   dimension.
///
/// Returns
/// -------
/// `ACFResult<Array<f64, D>>`
///   Array of the same shape as `x`. Entry `ℓ` along `axis` is the
///   autocorrelation at lag `ℓ` for that lane; lag 0 is exactly 1.0 for
///   every lane with non-zero variance.
///
/// Errors
/// ------
/// - `ACFError::InvalidAxis` when `axis` does not exist on `x`.
/// - `ACFError::EmptySeries` when the time axis has length zero.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::{Axis, array};
/// use rust_autocorr::autocorrelation::autocorr;
///
/// let x = array![1.0, 3.0, 2.0, 5.0, 4.0];
/// let acf = autocorr(&x, Axis(0)).unwrap();
///
/// assert_eq!(acf.len(), 5);
/// assert!((acf[0] - 1.0).abs() < 1e-12);
/// ```
pub fn autocorr<S, D>(x: &ArrayBase<S, D>, axis: Axis) -> ACFResult<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let n = validate_series(x, axis)?;
    let mut pair = FftPair::new(next_regular(2 * n));
    let mut buffer = vec![Complex::new(0.0, 0.0); pair.len()];

    let mut acf = Array::<f64, D>::zeros(x.raw_dim());
    Zip::from(acf.lanes_mut(axis)).and(x.lanes(axis)).for_each(|mut out, lane| {
        let mean = lane.sum() / n as f64;
        for (slot, &value) in buffer.iter_mut().zip(lane.iter()) {
            *slot = Complex::new(value - mean, 0.0);
        }
        buffer[n..].fill(Complex::new(0.0, 0.0));

        pair.forward(&mut buffer);
        for c in buffer.iter_mut() {
            *c = Complex::new(c.norm_sqr(), 0.0);
        }
        pair.inverse(&mut buffer);

        let lag0 = buffer[0].re;
        for (dst, src) in out.iter_mut().zip(&buffer[..n]) {
            *dst = src.re / lag0;
        }
    });
    Ok(acf)
}
