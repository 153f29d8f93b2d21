//! DSP building blocks for radio cell search
//!
//! - `level` - average power and dB conversions
//! - `fshift` - frequency shifting of complex sequences
//! - `tshift` - cyclic time shifting in place
//! - `interp` - piecewise-linear interpolation on irregular grids
//! - `chi2` - chi-squared CDF, inverse CDF and detection thresholds
//! - `fft` - unitary FFT pair
//! - `resample` - FFT-based sample-rate conversion
//! - `noise` - complex white Gaussian noise

pub mod sample;
pub mod level;
pub mod fshift;
pub mod tshift;
pub mod interp;
pub mod chi2;
pub mod fft;
pub mod resample;
pub mod noise;
pub mod config;
pub mod tracing_init;

pub use sample::{Complex, Complex64, Power};
pub use level::{average_power, db10, db20, from_db10, from_db20};
pub use fshift::{fshift, fshift_inplace, fshift_normalized, fshift_normalized_inplace};
pub use tshift::{tshift, tshift_by, TimeShiftError};
pub use interp::{interp1, Interpolator, InterpolationError};
pub use chi2::{chi2cdf, chi2cdf_inv, detection_threshold, ChiSquaredError};
pub use fft::{dft, idft, SpectrumPlanner};
pub use resample::{interpft, ResampleError};
pub use noise::blnoise;
pub use config::ThresholdConfig;
