//! autocorrelation::iat — integrated autocorrelation time with windowing.
//!
//! Purpose
//! -------
//! Estimate the integrated autocorrelation time τ_int of each dimension of a
//! `(n_samples, n_dims)` series by summing its ACF over a truncation window,
//! either supplied by the caller or chosen automatically at the first
//! negative ACF value (Chodera et al., JCTC 3(1):26–41, 2007).
//!
//! Key behaviors
//! -------------
//! - Call [`autocorr`] once along axis 0, then post-process each column.
//! - Resolve one window per dimension from a [`Window`] policy.
//! - Compute τ_int[j] = 1 + 2 · Σ_{ℓ=1}^{w_j−1} ACF[ℓ, j].
//! - Report the resolved windows, where each came from, and the effective
//!   sample size n / τ_int through [`IATOutcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A flat `(n,)` input is treated as `(n, 1)`.
//! - Windows are clamped to `n`. A window of 0 or 1 yields τ_int = 1.
//! - When the ACF of a dimension never turns negative, its window is the
//!   full series length; this is not an error.
//! - Degenerate inputs (zero variance, NaN/±∞) yield NaN τ_int values
//!   instead of errors.
//!
//! Downstream usage
//! ----------------
//! - Use [`integrated_autocorr`] when only τ_int is needed.
//! - Use [`IATOutcome::estimate`] to inspect windows or the effective
//!   sample size, or to enable diagnostics via [`IATOptions::verbose`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover window resolution on hand-built ACFs, scalar
//!   broadcasting, per-dimension windows, clamping, shapes and error paths.
//! - Statistical checks on white noise and AR(1) series live in
//!   `tests/integration_iat_pipeline.rs`.

use ndarray::{Array1, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Dimension, s};

use crate::autocorrelation::{
    acf::autocorr,
    errors::ACFResult,
    options::{IATOptions, Window},
    search::find_first,
    validation::as_samples_by_dims,
};

/// Where the truncation window of a dimension came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSource {
    /// First lag with a negative ACF value.
    ZeroCrossing,
    /// Automatic selection found no negative value; the whole ACF was used.
    FullLength,
    /// Supplied by the caller (scalar or per-dimension).
    Fixed,
}

/// IATOutcome — integrated autocorrelation times and their windows.
///
/// Purpose
/// -------
/// Hold the per-dimension result of one IAT estimation together with the
/// information needed to audit it.
///
/// Fields
/// ------
/// - `tau_int`: `Array1<f64>`
///   τ_int for each dimension, in input column order.
/// - `windows`: `Array1<usize>`
///   Resolved (clamped) window for each dimension.
/// - `sources`: `Vec<WindowSource>`
///   Origin of each window.
/// - `n_samples`: `usize`
///   Length of the time axis.
///
/// Invariants
/// ----------
/// - All three per-dimension collections have the same length `n_dims`.
/// - `windows[j] ≤ n_samples` for every `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct IATOutcome {
    tau_int: Array1<f64>,
    windows: Array1<usize>,
    sources: Vec<WindowSource>,
    n_samples: usize,
}

impl IATOutcome {
    /// Estimate τ_int for every dimension of `x`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `&ArrayBase<S, D>`
    ///   Series of shape `(n_samples,)` or `(n_samples, n_dims)`, time along
    ///   axis 0.
    /// - `opts`: `&IATOptions`
    ///   Window policy and diagnostics switch.
    ///
    /// Returns
    /// -------
    /// `ACFResult<IATOutcome>`
    ///
    /// Errors
    /// ------
    /// - `ACFError::EmptySeries` when `n_samples == 0`.
    /// - `ACFError::UnsupportedShape` for inputs that are not 1-D or 2-D.
    /// - `ACFError::UnsupportedWindow` when a per-dimension window list does
    ///   not have one entry per dimension.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::Array1;
    /// use rust_autocorr::autocorrelation::{IATOptions, IATOutcome, Window};
    ///
    /// let x = Array1::from_shape_fn(200, |t| ((t * 7919) % 101) as f64);
    /// let outcome = IATOutcome::estimate(&x, &IATOptions::new(Window::Fixed(10), false)).unwrap();
    ///
    /// assert_eq!(outcome.tau_int().len(), 1);
    /// assert_eq!(outcome.windows()[0], 10);
    /// ```
    pub fn estimate<S, D>(x: &ArrayBase<S, D>, opts: &IATOptions) -> ACFResult<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let samples = as_samples_by_dims(x)?;
        opts.window.check_dims(samples.ncols())?;

        let acf = autocorr(&samples, Axis(0))?;
        let (windows, sources) = resolve_windows(&acf.view(), &opts.window);
        let tau_int = acf
            .axis_iter(Axis(1))
            .zip(windows.iter())
            .map(|(column, &window)| 1.0 + 2.0 * sum_lags(column, window))
            .collect::<Array1<f64>>();

        let outcome = IATOutcome { tau_int, windows, sources, n_samples: samples.nrows() };

        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            log_diagnostics(&terminal_logger(), &outcome, &acf.view());
        }

        Ok(outcome)
    }

    /// Integrated autocorrelation time of each dimension.
    pub fn tau_int(&self) -> &Array1<f64> {
        &self.tau_int
    }

    /// Resolved window of each dimension.
    pub fn windows(&self) -> &Array1<usize> {
        &self.windows
    }

    /// Origin of each window.
    pub fn window_sources(&self) -> &[WindowSource] {
        &self.sources
    }

    /// Whether the automatic rule found a zero crossing, per dimension.
    /// Always `false` for caller-supplied windows.
    pub fn crossed_zero(&self) -> Vec<bool> {
        self.sources.iter().map(|&s| s == WindowSource::ZeroCrossing).collect()
    }

    /// Length of the time axis.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Effective number of independent samples, n / τ_int, per dimension.
    pub fn effective_sample_size(&self) -> Array1<f64> {
        let n = self.n_samples as f64;
        self.tau_int.mapv(|tau| n / tau)
    }

    /// Consume the outcome, keeping only τ_int.
    pub fn into_tau_int(self) -> Array1<f64> {
        self.tau_int
    }
}

/// Estimate the integrated autocorrelation time of each dimension of `x`.
///
/// Thin wrapper over [`IATOutcome::estimate`] with diagnostics disabled.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, D>`
///   `(n_samples,)` or `(n_samples, n_dims)` series, time along axis 0.
/// - `window`: `impl Into<Window>`
///   [`Window::Auto`] (or `None::<usize>`) for the zero-crossing rule, a
///   `usize` / [`Window::Fixed`] to broadcast one window, or
///   [`Window::PerDimension`].
///
/// Returns
/// -------
/// `ACFResult<Array1<f64>>` with one τ_int per dimension.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::Array2;
/// use rust_autocorr::autocorrelation::{Window, integrated_autocorr};
///
/// let x = Array2::from_shape_fn((500, 3), |(t, j)| ((t * (j + 3) * 7919) % 1000) as f64);
/// let tau = integrated_autocorr(&x, Window::Auto).unwrap();
///
/// assert_eq!(tau.len(), 3);
/// ```
pub fn integrated_autocorr<S, D>(
    x: &ArrayBase<S, D>, window: impl Into<Window>,
) -> ACFResult<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let opts = IATOptions::new(window.into(), false);
    Ok(IATOutcome::estimate(x, &opts)?.into_tau_int())
}

//
// ---------- Private helpers ----------
//

/// Resolve one window per column of an `(n, d)` ACF.
///
/// The caller guarantees that `PerDimension` windows have length `d`.
fn resolve_windows(
    acf: &ArrayView2<'_, f64>, window: &Window,
) -> (Array1<usize>, Vec<WindowSource>) {
    let (n, d) = acf.dim();
    match window {
        Window::Auto => {
            let first = find_first(&acf.mapv(|value| value < 0.0));
            let sources = first
                .iter()
                .map(|&w| if w < n { WindowSource::ZeroCrossing } else { WindowSource::FullLength })
                .collect();
            (first, sources)
        }
        Window::Fixed(w) => (Array1::from_elem(d, (*w).min(n)), vec![WindowSource::Fixed; d]),
        Window::PerDimension(ws) => {
            (ws.iter().map(|&w| w.min(n)).collect(), vec![WindowSource::Fixed; d])
        }
    }
}

/// Σ_{ℓ=1}^{window−1} column[ℓ]; zero for windows of 0 or 1.
#[inline]
fn sum_lags(column: ArrayView1<'_, f64>, window: usize) -> f64 {
    let end = window.min(column.len());
    if end <= 1 { 0.0 } else { column.slice(s![1..end]).sum() }
}

/// Non-blocking terminal logger; records are flushed when it is dropped.
#[cfg(feature = "obs_slog")]
fn terminal_logger() -> slog::Logger {
    use slog::{Drain, o};

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, o!("estimator" => "integrated_autocorr"))
}

#[cfg(feature = "obs_slog")]
fn log_diagnostics(log: &slog::Logger, outcome: &IATOutcome, acf: &ArrayView2<'_, f64>) {
    use slog::{info, warn};

    info!(log, "estimated integrated autocorrelation time";
        "n_samples" => outcome.n_samples, "n_dims" => outcome.tau_int.len());
    for (j, ((tau, window), source)) in
        outcome.tau_int.iter().zip(outcome.windows.iter()).zip(&outcome.sources).enumerate()
    {
        info!(log, "dimension"; "dim" => j, "window" => *window, "source" => ?source,
            "tau_int" => *tau);
        if !acf[[0, j]].is_finite() {
            warn!(log, "zero or non-finite lag-0 autocovariance; ACF and tau_int are NaN";
                "dim" => j);
        }
        if *source == WindowSource::FullLength {
            warn!(log, "ACF never crossed zero; summed every available lag"; "dim" => j);
        }
    }
}
