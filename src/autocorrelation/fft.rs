//! autocorrelation::fft — transform sizing and a planned forward/inverse pair.
//!
//! Purpose
//! -------
//! Wrap the complex-to-complex FFT primitive used by the ACF estimator and
//! choose zero-padded transform lengths that keep the FFT fast.
//!
//! Key behaviors
//! -------------
//! - [`next_regular`] returns the smallest 5-smooth integer (`2^a·3^b·5^c`)
//!   that is ≥ a target length.
//! - [`FftPair`] plans a forward and an inverse transform of one length
//!   once, and runs them in place with a reusable scratch buffer.
//!
//! Conventions
//! -----------
//! - Transforms are unnormalized (rustfft convention): `inverse(forward(x))`
//!   equals `len · x`. Callers that normalize by lag 0 never need to undo
//!   this factor.

use std::sync::Arc;

use rustfft::{Fft, FftPlanner, num_complex::Complex};

/// Smallest 5-smooth ("regular") integer greater than or equal to `target`.
///
/// Regular numbers factor into 2, 3 and 5 only, which are the radices
/// rustfft handles with its fastest butterflies.
///
/// Parameters
/// ----------
/// - `target`: `usize`
///   Minimum acceptable length.
///
/// Returns
/// -------
/// `usize`
///   `target` itself when `target ≤ 6` or a power of two; otherwise the
///   smallest `2^a·3^b·5^c ≥ target`.
///
/// Examples
/// --------
/// ```rust
/// use rust_autocorr::autocorrelation::fft::next_regular;
///
/// assert_eq!(next_regular(7), 8);
/// assert_eq!(next_regular(13), 15);
/// assert_eq!(next_regular(101), 108);
/// ```
pub fn next_regular(target: usize) -> usize {
    if target <= 6 || target.is_power_of_two() {
        return target;
    }

    let mut best = usize::MAX;
    let mut p5: usize = 1;
    while p5 < target {
        let mut p35 = p5;
        while p35 < target {
            // Pad p35 with the smallest power of two that reaches target.
            let p2 = target.div_ceil(p35).next_power_of_two();
            let candidate = p2 * p35;
            if candidate == target {
                return candidate;
            }
            best = best.min(candidate);
            p35 *= 3;
            if p35 == target {
                return p35;
            }
        }
        best = best.min(p35);
        p5 *= 5;
        if p5 == target {
            return p5;
        }
    }
    best.min(p5)
}

/// FftPair — planned forward and inverse transforms of a fixed length.
///
/// Fields
/// ------
/// - `forward`, `inverse`: planned rustfft transforms of length `len`.
/// - `scratch`: in-place scratch buffer sized for the larger of the two.
///
/// Invariants
/// ----------
/// - Buffers passed to [`FftPair::forward`] / [`FftPair::inverse`] must have
///   length exactly `len`.
pub struct FftPair {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex<f64>>,
}

impl FftPair {
    /// Plan both transforms for buffers of length `len`.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        let scratch_len = forward.get_inplace_scratch_len().max(inverse.get_inplace_scratch_len());
        FftPair { len, forward, inverse, scratch: vec![Complex::new(0.0, 0.0); scratch_len] }
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the planned length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-place forward transform.
    pub fn forward(&mut self, buffer: &mut [Complex<f64>]) {
        debug_assert_eq!(buffer.len(), self.len);
        self.forward.process_with_scratch(buffer, &mut self.scratch);
    }

    /// In-place (unnormalized) inverse transform.
    pub fn inverse(&mut self, buffer: &mut [Complex<f64>]) {
        debug_assert_eq!(buffer.len(), self.len);
        self.inverse.process_with_scratch(buffer, &mut self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Fixed points and known values of `next_regular`.
    // - Minimality of `next_regular` against a brute-force search.
    // - The unnormalized round trip of `FftPair`.
    // -------------------------------------------------------------------------

    fn is_regular(mut k: usize) -> bool {
        if k == 0 {
            return false;
        }
        for p in [2, 3, 5] {
            while k.is_multiple_of(p) {
                k /= p;
            }
        }
        k == 1
    }

    #[test]
    // Purpose
    // -------
    // Check that small targets and powers of two are returned unchanged.
    //
    // Given
    // -----
    // - Targets 1..=6 and the powers of two 8, 64, 1024.
    //
    // Expect
    // ------
    // - `next_regular(t) == t` for each.
    fn next_regular_returns_small_targets_and_powers_of_two_unchanged() {
        for t in (1..=6).chain([8, 64, 1024]) {
            assert_eq!(next_regular(t), t, "target {t}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check hand-computed values of the smallest 5-smooth upper bound.
    //
    // Given
    // -----
    // - A handful of non-regular targets.
    //
    // Expect
    // ------
    // - The documented regular numbers.
    fn next_regular_matches_known_values() {
        let cases = [(7, 8), (11, 12), (13, 15), (17, 18), (97, 100), (101, 108), (1001, 1024)];
        for (target, expected) in cases {
            assert_eq!(next_regular(target), expected, "target {target}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `next_regular` is regular, bounds the target, and is
    // the smallest such number.
    //
    // Given
    // -----
    // - Every target in 1..2000.
    //
    // Expect
    // ------
    // - The result is regular, ≥ target, and no regular number lies in
    //   [target, result).
    fn next_regular_is_minimal_regular_upper_bound() {
        for target in 1..2000 {
            let r = next_regular(target);
            assert!(r >= target, "result {r} below target {target}");
            assert!(is_regular(r), "result {r} for target {target} is not 5-smooth");
            assert!(
                (target..r).all(|k| !is_regular(k)),
                "a smaller regular number exists below {r} for target {target}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm the unnormalized convention: inverse(forward(x)) = len · x.
    //
    // Given
    // -----
    // - A length-12 complex buffer with distinct real values.
    //
    // Expect
    // ------
    // - After the round trip each element equals 12 × its original value.
    fn fft_pair_round_trip_scales_by_length() {
        // Arrange
        let len = 12;
        let mut pair = FftPair::new(len);
        let original: Vec<Complex<f64>> =
            (0..len).map(|k| Complex::new(k as f64 - 3.5, 0.0)).collect();
        let mut buffer = original.clone();

        // Act
        pair.forward(&mut buffer);
        pair.inverse(&mut buffer);

        // Assert
        assert_eq!(pair.len(), len);
        for (out, inp) in buffer.iter().zip(&original) {
            assert_relative_eq!(out.re, inp.re * len as f64, epsilon = 1e-9);
            assert_relative_eq!(out.im, 0.0, epsilon = 1e-9);
        }
    }
}
