//! Frequency shifting of complex baseband sequences
//!
//! Multiplies sample `t` by `exp(i*k*t)` with `k = π * f / (fs / 2)`, moving
//! the spectrum up by `f` when the sequence was sampled at `fs`. With
//! `fs = 2` the shift `f` is a fraction of the Nyquist frequency.
//!
//! The phase is evaluated directly with `cos`/`sin` per sample rather than by
//! a rotating phasor, so long sequences do not accumulate rounding drift.

use core::f64::consts::PI;

use crate::sample::Complex64;

/// Sample rate at which a shift is expressed as a fraction of Nyquist
pub const NYQUIST_NORMALIZED_RATE: f64 = 2.0;

/// Phase increment per sample in radians
#[inline]
fn phase_step(f: f64, fs: f64) -> f64 {
    PI * f / (fs / 2.0)
}

#[inline]
fn phasor(k: f64, t: usize) -> Complex64 {
    let theta = k * t as f64;
    Complex64::new(libm::cos(theta), libm::sin(theta))
}

/// Shift `seq` up by `f` Hz assuming it was sampled at `fs` Hz.
///
/// # Arguments
/// * `seq` - Input samples
/// * `f` - Frequency shift (negative shifts down)
/// * `fs` - Sample rate of `seq`, in the same unit as `f`
///
/// # Returns
/// A new sequence of the same length
pub fn fshift(seq: &[Complex64], f: f64, fs: f64) -> Vec<Complex64> {
    let k = phase_step(f, fs);
    seq.iter()
        .enumerate()
        .map(|(t, &s)| s * phasor(k, t))
        .collect()
}

/// Shift `seq` by `f`, expressed as a fraction of the Nyquist frequency.
pub fn fshift_normalized(seq: &[Complex64], f: f64) -> Vec<Complex64> {
    fshift(seq, f, NYQUIST_NORMALIZED_RATE)
}

/// In-place variant of [`fshift`]; does not allocate.
pub fn fshift_inplace(seq: &mut [Complex64], f: f64, fs: f64) {
    let k = phase_step(f, fs);
    for (t, s) in seq.iter_mut().enumerate() {
        *s *= phasor(k, t);
    }
}

/// In-place variant of [`fshift_normalized`].
pub fn fshift_normalized_inplace(seq: &mut [Complex64], f: f64) {
    fshift_inplace(seq, f, NYQUIST_NORMALIZED_RATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::average_power;
    use rustfft::FftPlanner;

    fn test_sequence(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|t| {
                let t = t as f64;
                Complex64::new((0.37 * t).sin() + 0.2, (0.05 * t).cos() - 0.1 * t / n as f64)
            })
            .collect()
    }

    fn assert_close(a: &[Complex64], b: &[Complex64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            let err = (x - y).norm();
            assert!(err <= tol * (1.0 + y.norm()), "Mismatch at {}: {} vs {} (err {})", i, x, y, err);
        }
    }

    #[test]
    fn test_dc_becomes_tone() {
        // 1 kHz shift of a constant at 8 kHz: 8 samples per cycle
        let seq = vec![Complex64::new(1.0, 0.0); 16];
        let out = fshift(&seq, 1000.0, 8000.0);

        let expected = core::f64::consts::FRAC_PI_4;
        for (t, s) in out.iter().enumerate() {
            let phase = expected * t as f64;
            assert!((s.re - phase.cos()).abs() < 1e-12);
            assert!((s.im - phase.sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_sample_untouched() {
        let seq = test_sequence(8);
        let out = fshift(&seq, 0.3, 1.0);
        assert_eq!(out[0], seq[0]);
    }

    #[test]
    fn test_normalized_matches_fs_two() {
        let seq = test_sequence(100);
        assert_eq!(fshift_normalized(&seq, 0.125), fshift(&seq, 0.125, 2.0));
    }

    #[test]
    fn test_inplace_matches_copy() {
        let seq = test_sequence(257);
        let copy = fshift(&seq, 1.5e3, 1.92e6);

        let mut inplace = seq.clone();
        fshift_inplace(&mut inplace, 1.5e3, 1.92e6);
        assert_eq!(inplace, copy);

        let mut normalized = seq.clone();
        fshift_normalized_inplace(&mut normalized, -0.4);
        assert_eq!(normalized, fshift_normalized(&seq, -0.4));
    }

    #[test]
    fn test_shift_is_invertible() {
        let seq = test_sequence(10_000);
        for &f in &[0.01, -0.25, 0.9, 123.456] {
            let mut restored = fshift(&seq, -f, 3.84e6);
            fshift_inplace(&mut restored, f, 3.84e6);
            assert_close(&restored, &seq, 1e-9);
        }
    }

    #[test]
    fn test_preserves_power() {
        let seq = test_sequence(1024);
        let out = fshift_normalized(&seq, 0.33);
        let (p_in, p_out) = (average_power(&seq), average_power(&out));
        assert!((p_in - p_out).abs() < 1e-12 * p_in);
    }

    #[test]
    fn test_moves_spectral_peak() {
        // Shifting DC by 4/64 of fs lands the energy in FFT bin 4
        let n = 64;
        let mut buf = fshift(&vec![Complex64::new(1.0, 0.0); n], 4.0, n as f64);

        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(n).process(&mut buf);

        let peak = buf
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .map(|(i, _)| i);
        assert_eq!(peak, Some(4));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(fshift(&[], 1.0, 2.0).is_empty());
        let mut empty: [Complex64; 0] = [];
        fshift_inplace(&mut empty, 1.0, 2.0);
    }

    #[test]
    fn test_infinity_propagates() {
        let seq = vec![Complex64::new(f64::INFINITY, 0.0), Complex64::new(1.0, 0.0)];
        let out = fshift(&seq, 0.0, 2.0);
        assert!(out[0].re.is_infinite());
        assert_eq!(out[1], Complex64::new(1.0, 0.0));
    }
}
