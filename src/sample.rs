//! Sample types shared by every stage
//!
//! Complex baseband samples are `Complex<f64>`; real-valued data (grids, power
//! readings, thresholds) are plain `f64`.

use num::traits::Float;
pub use rustfft::num_complex::{Complex, Complex64};

/// Instantaneous power of a single sample
///
/// Implemented for real and complex samples so that level measurements work
/// on either kind of sequence.
pub trait Power {
    /// `re² + im²` for complex samples, `x²` for real ones
    fn power(&self) -> f64;
}

impl Power for f64 {
    fn power(&self) -> f64 {
        self * self
    }
}

impl Power for f32 {
    fn power(&self) -> f64 {
        let x = *self as f64;
        x * x
    }
}

impl<T: Float> Power for Complex<T> {
    fn power(&self) -> f64 {
        self.norm_sqr().to_f64().unwrap_or(f64::NAN)
    }
}
