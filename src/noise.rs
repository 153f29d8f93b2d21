//! Complex white Gaussian noise
//!
//! Circular complex noise with unit average power: real and imaginary parts
//! are independent N(0, 1/2). Used to build synthetic captures and to
//! calibrate thresholds against a known noise floor.

use core::f64::consts::FRAC_1_SQRT_2;

use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::sample::Complex64;

/// Generate `n` samples of unit-power complex white Gaussian noise
pub fn blnoise(n: usize) -> Vec<Complex64> {
    let mut rng = rand::rng();
    blnoise_with_rng(&mut rng, n)
}

/// Same as [`blnoise`] but drawing from a caller-supplied generator
pub fn blnoise_with_rng<R: Rng>(rng: &mut R, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            Complex64::new(re, im) * FRAC_1_SQRT_2
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::average_power;
    use rand::rngs::StdRng;

    #[test]
    fn test_unit_power() {
        let mut rng = StdRng::seed_from_u64(42);
        let noise = blnoise_with_rng(&mut rng, 200_000);
        let p = average_power(&noise);
        assert!((p - 1.0).abs() < 0.02, "Average power: {}", p);
    }

    #[test]
    fn test_components_balanced_and_zero_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = blnoise_with_rng(&mut rng, 100_000);
        let n = noise.len() as f64;

        let mean_re = noise.iter().map(|s| s.re).sum::<f64>() / n;
        let mean_im = noise.iter().map(|s| s.im).sum::<f64>() / n;
        let var_re = noise.iter().map(|s| s.re * s.re).sum::<f64>() / n;
        let var_im = noise.iter().map(|s| s.im * s.im).sum::<f64>() / n;

        assert!(mean_re.abs() < 0.01 && mean_im.abs() < 0.01);
        assert!((var_re - 0.5).abs() < 0.02, "var_re = {}", var_re);
        assert!((var_im - 0.5).abs() < 0.02, "var_im = {}", var_im);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = blnoise_with_rng(&mut StdRng::seed_from_u64(1234), 64);
        let b = blnoise_with_rng(&mut StdRng::seed_from_u64(1234), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_length() {
        assert_eq!(blnoise(17).len(), 17);
        assert!(blnoise(0).is_empty());
    }
}
