//! FFT-based resampling
//!
//! Changes the number of samples of a complex sequence by resizing its
//! spectrum: normalized forward FFT, zero-pad or truncate around the Nyquist
//! boundary, normalized inverse FFT, then scale by `sqrt(new_len / old_len)`
//! so a band-limited signal keeps its amplitude and average power.
//!
//! **Bin placement** (`K = min(old_len, new_len)`):
//! - The `ceil(K/2)` lowest bins (DC and positive frequencies) go to the
//!   front of the new spectrum and the `floor((K-1)/2)` highest negative
//!   frequencies go to the back.
//! - When `K` is even there is one more bin at `K/2`. Growing from an even
//!   length splits that source bin in half between `+K/2` and `-K/2`;
//!   shrinking to an even length sums source bins `+K/2` and `-K/2` into the
//!   new Nyquist bin.
//!
//! Real-valued input stays real-valued, and growing then shrinking back to
//! the original length restores the input up to rounding.

use num::Zero;
use snafu::Snafu;
use tracing::trace;

use crate::fft::SpectrumPlanner;
use crate::sample::Complex64;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ResampleError {
    /// Nothing to resample
    #[snafu(display("Cannot resample an empty sequence"))]
    EmptyInput,

    /// Target length must be at least one sample
    #[snafu(display("Target length must be at least one sample"))]
    ZeroLength,
}

/// Resize the spectrum `x` (length `n_x`) to `n_y` bins.
fn resize_spectrum(x: &[Complex64], n_y: usize) -> Vec<Complex64> {
    let n_x = x.len();
    let k = n_x.min(n_y);
    let n_pos = k.div_ceil(2);
    let n_neg = (k - 1) / 2;

    let mut y = vec![Complex64::zero(); n_y];
    y[..n_pos].copy_from_slice(&x[..n_pos]);
    y[n_y - n_neg..].copy_from_slice(&x[n_x - n_neg..]);

    if k % 2 == 0 {
        let nyquist = k / 2;
        if n_x < n_y {
            let half = x[nyquist] * 0.5;
            y[nyquist] = half;
            y[n_y - nyquist] = half;
        } else if n_x > n_y {
            y[nyquist] = x[nyquist] + x[n_x - nyquist];
        }
    }

    trace!(n_x, n_y, n_pos, n_neg, "Resized spectrum");
    y
}

/// Resample `seq` to `n_y` samples using the FFT.
///
/// Returns an exact copy when `n_y == seq.len()`.
///
/// # Arguments
/// * `seq` - Input samples (non-empty)
/// * `n_y` - Number of output samples (non-zero)
///
/// # Errors
/// * `EmptyInput` - `seq` is empty
/// * `ZeroLength` - `n_y == 0`
///
/// # Example
/// ```
/// use cellscan_dsp::{resample, Complex64};
///
/// let x = vec![Complex64::new(1.0, 0.0); 8];
/// let y = resample::interpft(&x, 12)?;
/// assert_eq!(y.len(), 12);
/// assert!(y.iter().all(|s| (s - Complex64::new(1.0, 0.0)).norm() < 1e-12));
/// # Ok::<(), cellscan_dsp::ResampleError>(())
/// ```
pub fn interpft(seq: &[Complex64], n_y: usize) -> Result<Vec<Complex64>, ResampleError> {
    SpectrumPlanner::new().resample(seq, n_y)
}

impl SpectrumPlanner {
    /// [`interpft`] reusing this planner's FFT plans
    pub fn resample(&mut self, seq: &[Complex64], n_y: usize) -> Result<Vec<Complex64>, ResampleError> {
        let n_x = seq.len();
        if n_x == 0 {
            return Err(ResampleError::EmptyInput);
        }
        if n_y == 0 {
            return Err(ResampleError::ZeroLength);
        }
        if n_y == n_x {
            return Ok(seq.to_vec());
        }

        let spectrum = self.forward(seq);
        let resized = resize_spectrum(&spectrum, n_y);
        let mut y = self.inverse(&resized);

        let scale = (n_y as f64 / n_x as f64).sqrt();
        for s in y.iter_mut() {
            *s *= scale;
        }
        Ok(y)
    }
}
