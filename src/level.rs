//! Power and decibel conversions
//!
//! `db10`/`from_db10` are for power quantities, `db20`/`from_db20` for
//! amplitudes. Non-positive arguments to the dB functions follow `log10`:
//! `-inf` at zero and NaN below it.

use crate::sample::Power;

/// Average power of a sequence: the mean of `|x|²` over all samples.
///
/// An empty sequence gives NaN.
///
/// # Example
/// ```
/// use cellscan_dsp::{level, Complex64};
///
/// let seq = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 2.0)];
/// assert_eq!(level::average_power(&seq), 3.0);
/// ```
pub fn average_power<T: Power>(seq: &[T]) -> f64 {
    let total: f64 = seq.iter().map(Power::power).sum();
    total / seq.len() as f64
}

/// `10 * log10(x)`
pub fn db10(x: f64) -> f64 {
    10.0 * libm::log10(x)
}

/// `20 * log10(x)`
pub fn db20(x: f64) -> f64 {
    20.0 * libm::log10(x)
}

/// `10^(x/10)`, inverse of [`db10`]
pub fn from_db10(x: f64) -> f64 {
    libm::pow(10.0, x / 10.0)
}

/// `10^(x/20)`, inverse of [`db20`]
pub fn from_db20(x: f64) -> f64 {
    libm::pow(10.0, x / 20.0)
}

/// [`db10`] of every element
pub fn db10_vec(seq: &[f64]) -> Vec<f64> {
    seq.iter().copied().map(db10).collect()
}

/// [`db20`] of every element
pub fn db20_vec(seq: &[f64]) -> Vec<f64> {
    seq.iter().copied().map(db20).collect()
}

/// [`from_db10`] of every element
pub fn from_db10_vec(seq: &[f64]) -> Vec<f64> {
    seq.iter().copied().map(from_db10).collect()
}

/// [`from_db20`] of every element
pub fn from_db20_vec(seq: &[f64]) -> Vec<f64> {
    seq.iter().copied().map(from_db20).collect()
}
