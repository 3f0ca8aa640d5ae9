//! autocorrelation — FFT autocorrelation and integrated autocorrelation time.
//!
//! Purpose
//! -------
//! Estimate how strongly a series (typically Markov-chain output) is
//! correlated with its own past, and summarize that as the integrated
//! autocorrelation time τ_int, i.e. how many correlated samples are worth
//! one independent sample.
//!
//! Key behaviors
//! -------------
//! - [`autocorr`] computes the mean-centred, lag-0-normalized ACF of an
//!   array of any dimensionality along a chosen time axis using the FFT.
//! - [`integrated_autocorr`] and [`IATOutcome::estimate`] turn that ACF into
//!   one τ_int per dimension, with a truncation [`Window`] that is either
//!   supplied or selected at the first negative ACF value.
//! - [`find_first`] and [`fft::next_regular`] are the small utilities the
//!   estimators are built on and are exposed for reuse.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite, fully materialized, regularly sampled series. The
//!   estimators never mutate their input.
//! - Shape and configuration problems are reported as [`ACFError`];
//!   numerical degeneracy (zero variance, NaN/±∞) propagates as NaN in the
//!   results.
//! - All routines are synchronous, stateless and safe to call concurrently
//!   on different inputs.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ndarray::Array2;
//!   use rust_autocorr::autocorrelation::{ACFResult, Window, integrated_autocorr};
//!
//!   fn tau(samples: &Array2<f64>) -> ACFResult<f64> {
//!       let tau = integrated_autocorr(samples, Window::Auto)?;
//!       Ok(tau.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
//!   }
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its helpers and error paths.
//! - `tests/integration_iat_pipeline.rs` checks τ_int on seeded white-noise
//!   and AR(1) series against their theoretical values.

pub mod acf;
pub mod errors;
pub mod fft;
pub mod iat;
pub mod options;
pub mod search;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::acf::autocorr;
pub use self::errors::{ACFError, ACFResult};
pub use self::iat::{IATOutcome, WindowSource, integrated_autocorr};
pub use self::options::{IATOptions, Window};
pub use self::search::find_first;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::acf::autocorr;
    pub use super::errors::{ACFError, ACFResult};
    pub use super::iat::{IATOutcome, WindowSource, integrated_autocorr};
    pub use super::options::{IATOptions, Window};
}
