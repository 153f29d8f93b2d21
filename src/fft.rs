//! Unitary FFT pair
//!
//! `rustfft` computes unnormalized transforms in both directions. The pair
//! here divides each direction by `sqrt(n)`, so `idft(dft(x)) == x` up to
//! rounding and total energy is the same in both domains.

use num::Zero;
use rustfft::{FftDirection, FftPlanner};

use crate::sample::Complex64;

/// Reusable planner for the normalized transforms
///
/// Holding one of these avoids re-planning when the same lengths are
/// transformed repeatedly.
pub struct SpectrumPlanner {
    planner: FftPlanner<f64>,
}

impl Default for SpectrumPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumPlanner {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    fn transform(&mut self, seq: &[Complex64], direction: FftDirection) -> Vec<Complex64> {
        let n = seq.len();
        if n == 0 {
            return Vec::new();
        }

        let fft = self.planner.plan_fft(n, direction);
        let mut buf = seq.to_vec();
        let mut scratch = vec![Complex64::zero(); fft.get_inplace_scratch_len()];
        fft.process_with_scratch(&mut buf, &mut scratch);

        let scale = 1.0 / (n as f64).sqrt();
        for x in buf.iter_mut() {
            *x *= scale;
        }
        buf
    }

    /// Forward FFT scaled by `1/sqrt(n)`
    pub fn forward(&mut self, seq: &[Complex64]) -> Vec<Complex64> {
        self.transform(seq, FftDirection::Forward)
    }

    /// Inverse FFT scaled by `1/sqrt(n)`
    pub fn inverse(&mut self, seq: &[Complex64]) -> Vec<Complex64> {
        self.transform(seq, FftDirection::Inverse)
    }
}

/// Normalized forward transform of `seq`
pub fn dft(seq: &[Complex64]) -> Vec<Complex64> {
    SpectrumPlanner::new().forward(seq)
}

/// Normalized inverse transform of `seq`
pub fn idft(seq: &[Complex64]) -> Vec<Complex64> {
    SpectrumPlanner::new().inverse(seq)
}
