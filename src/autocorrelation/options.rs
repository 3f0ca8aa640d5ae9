//! autocorrelation::options — window policy and IAT estimator options.
//!
//! Purpose
//! -------
//! Describe how many leading lags of the ACF the IAT estimator sums, and
//! bundle that choice with the estimator's diagnostic switch.
//!
//! Key behaviors
//! -------------
//! - [`Window`] selects automatic truncation at the first negative ACF value
//!   (Chodera et al. 2007), a single window broadcast to every dimension, or
//!   one window per dimension.
//! - [`Window::check_dims`] rejects per-dimension lists whose length does not
//!   match the data, which is the only way a `Window` can be misconfigured
//!   once constructed.
//! - [`IATOptions`] pairs a [`Window`] with a `verbose` flag that enables
//!   terminal diagnostics when the crate is built with `obs_slog`.
//!
//! Conventions
//! -----------
//! - Windows count lags starting at 0: a window `w` covers lags `0..w`, of
//!   which lags `1..w` are summed (lag 0 is the leading `1` of τ_int).
//! - Windows longer than the series are clamped to the series length.

use crate::autocorrelation::errors::{ACFError, ACFResult};

/// Lag-truncation policy for the integrated autocorrelation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Window {
    /// Truncate each dimension at the first lag where its ACF is negative;
    /// use the full series length if it never is.
    #[default]
    Auto,
    /// Same window for every dimension.
    Fixed(usize),
    /// One window per dimension, in column order.
    PerDimension(Vec<usize>),
}

impl Window {
    /// Check that the window is usable for data with `n_dims` dimensions.
    ///
    /// Errors
    /// ------
    /// - `ACFError::UnsupportedWindow` if `self` is `PerDimension` and its
    ///   length differs from `n_dims`.
    pub fn check_dims(&self, n_dims: usize) -> ACFResult<()> {
        match self {
            Window::PerDimension(windows) if windows.len() != n_dims => {
                Err(ACFError::UnsupportedWindow {
                    detail: format!("{windows:?} (length {}, data has {n_dims})", windows.len()),
                    reason: "expected exactly one window per dimension",
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<usize> for Window {
    fn from(window: usize) -> Self {
        Window::Fixed(window)
    }
}

impl From<Option<usize>> for Window {
    fn from(window: Option<usize>) -> Self {
        window.map_or(Window::Auto, Window::Fixed)
    }
}

/// IATOptions — configuration for [`IATOutcome::estimate`](super::iat::IATOutcome::estimate).
///
/// Fields
/// ------
/// - `window`: [`Window`]
///   Truncation policy; defaults to [`Window::Auto`].
/// - `verbose`: `bool`
///   Emit per-dimension diagnostics to the terminal. Only has an effect when
///   the crate is compiled with the `obs_slog` feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IATOptions {
    pub window: Window,
    pub verbose: bool,
}

impl IATOptions {
    pub fn new(window: Window, verbose: bool) -> Self {
        IATOptions { window, verbose }
    }
}
