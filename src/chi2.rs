//! Chi-squared statistics for detection thresholds
//!
//! The chi-squared CDF with `k` degrees of freedom is the regularized lower
//! incomplete gamma function `P(k/2, x/2)`. `P` itself comes from `statrs`;
//! its inverse is found here by a bracketed Newton iteration on `P`.

use snafu::Snafu;
use statrs::function::gamma::{gamma_lr, ln_gamma};
use tracing::debug;

#[derive(Debug, Snafu, PartialEq)]
pub enum ChiSquaredError {
    /// Degrees of freedom must be positive and finite
    #[snafu(display("Degrees of freedom must be positive and finite, got {k}"))]
    InvalidDegreesOfFreedom { k: f64 },

    /// Statistic must be non-negative
    #[snafu(display("Chi-squared statistic must be non-negative, got {x}"))]
    NegativeStatistic { x: f64 },

    /// Probability must lie in [0, 1]
    #[snafu(display("Probability must lie in [0, 1], got {p}"))]
    ProbabilityOutOfRange { p: f64 },
}

/// Newton iterations before giving up on further refinement
const MAX_ITERATIONS: usize = 200;

/// Target accuracy of the inverse, relative to the smaller tail probability
const PROBABILITY_TOLERANCE: f64 = 1e-15;

/// Below this `x`, `statrs` rounds `P(a, x)` to zero; the series is used instead
const SERIES_CUTOFF: f64 = 1e-10;

fn check_degrees_of_freedom(k: f64) -> Result<(), ChiSquaredError> {
    if k.is_finite() && k > 0.0 {
        Ok(())
    } else {
        Err(ChiSquaredError::InvalidDegreesOfFreedom { k })
    }
}

/// Power series `P(a, x) = x^a e^(-x) / Γ(a+1) * Σ x^n / ((a+1)...(a+n))`.
/// Only used for `x < SERIES_CUTOFF`, where a few terms reach full precision.
fn gamma_p_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut denom = a;
    while term > f64::EPSILON * sum {
        denom += 1.0;
        term *= x / denom;
        sum += term;
    }
    (a * x.ln() - x - ln_gamma(a + 1.0)).exp() * sum
}

/// Regularized lower incomplete gamma `P(a, x)` with the boundary values
/// `statrs` rejects filled in.
fn gamma_p(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else if x < SERIES_CUTOFF {
        gamma_p_series(a, x)
    } else {
        gamma_lr(a, x)
    }
}

/// Next trial point inside `(lo, hi)`; geometric while the bracket spans
/// orders of magnitude.
fn bisect(lo: f64, hi: f64) -> f64 {
    if lo > 0.0 && hi > 2.0 * lo {
        // Split roots so subnormal brackets do not underflow
        lo.sqrt() * hi.sqrt()
    } else {
        0.5 * (lo + hi)
    }
}

/// Solve `P(a, x) = p` for `x`, with `0 < p < 1`.
///
/// Returns 0 when the root lies below the smallest positive `f64`.
fn gamma_p_inv(a: f64, p: f64) -> f64 {
    let ln_gamma_a = ln_gamma(a);
    // Near p = 1 the resolution of P itself is the limit
    let tolerance = (PROBABILITY_TOLERANCE * p.min(1.0 - p)).max(f64::EPSILON * p);

    // P(a, x) <= x^a / Γ(a+1), so this x never overshoots the root. For tiny
    // x the bound is tight, so an underflow here means the root underflows.
    let mut lo = ((p.ln() + ln_gamma(a + 1.0)) / a).exp();
    if lo == 0.0 {
        return 0.0;
    }
    let mut hi = a.max(1.0);
    while gamma_p(a, hi) < p {
        lo = lo.max(hi);
        hi *= 2.0;
    }
    lo = lo.min(hi);

    let mut x = bisect(lo, hi);
    for _ in 0..MAX_ITERATIONS {
        let err = gamma_p(a, x) - p;
        if err.abs() <= tolerance {
            break;
        }
        if err > 0.0 {
            hi = x;
        } else {
            lo = x;
        }

        // dP/dx is the gamma density x^(a-1) e^(-x) / Γ(a)
        let density = ((a - 1.0) * x.ln() - x - ln_gamma_a).exp();
        let newton = x - err / density;
        let next = if density > 0.0 && newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            bisect(lo, hi)
        };

        if (next - x).abs() <= f64::EPSILON * x || hi - lo <= f64::EPSILON * hi {
            x = next;
            break;
        }
        x = next;
    }
    x
}

/// Probability that a chi-squared variable with `k` degrees of freedom is at
/// most `x`.
///
/// # Errors
/// * `InvalidDegreesOfFreedom` - `k` is not positive and finite
/// * `NegativeStatistic` - `x < 0` or NaN
pub fn chi2cdf(x: f64, k: f64) -> Result<f64, ChiSquaredError> {
    check_degrees_of_freedom(k)?;
    if !(x >= 0.0) {
        return Err(ChiSquaredError::NegativeStatistic { x });
    }
    Ok(gamma_p(k / 2.0, x / 2.0))
}

/// The value `x` for which `chi2cdf(x, k) == p`.
///
/// `p = 0` gives 0 and `p = 1` gives `+inf`.
///
/// # Errors
/// * `InvalidDegreesOfFreedom` - `k` is not positive and finite
/// * `ProbabilityOutOfRange` - `p` outside `[0, 1]` or NaN
///
/// # Example
/// ```
/// use cellscan_dsp::chi2::{chi2cdf, chi2cdf_inv};
///
/// let x = chi2cdf_inv(0.95, 2.0)?;
/// assert!((x - 5.991464547107979).abs() < 1e-9);
/// assert!((chi2cdf(x, 2.0)? - 0.95).abs() < 1e-12);
/// # Ok::<(), cellscan_dsp::ChiSquaredError>(())
/// ```
pub fn chi2cdf_inv(p: f64, k: f64) -> Result<f64, ChiSquaredError> {
    check_degrees_of_freedom(k)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(ChiSquaredError::ProbabilityOutOfRange { p });
    }
    if p == 0.0 {
        return Ok(0.0);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(2.0 * gamma_p_inv(k / 2.0, p))
}

/// Threshold that a chi-squared statistic of pure noise exceeds with
/// probability `pfa`.
pub fn detection_threshold(pfa: f64, k: f64) -> Result<f64, ChiSquaredError> {
    if !(0.0..=1.0).contains(&pfa) {
        return Err(ChiSquaredError::ProbabilityOutOfRange { p: pfa });
    }
    let threshold = chi2cdf_inv(1.0 - pfa, k)?;
    debug!(pfa, k, threshold, "Derived detection threshold");
    Ok(threshold)
}
