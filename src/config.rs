//! Detection threshold configuration
//!
//! A correlator output normalized by the noise power is chi-squared
//! distributed under the noise-only hypothesis. The threshold is the value
//! that noise alone exceeds with the configured false-alarm probability.

use crate::chi2::{detection_threshold, ChiSquaredError};
use crate::level::db10;

/// Configuration for a chi-squared detection threshold
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Probability that noise alone crosses the threshold
    pub false_alarm_probability: f64,
    /// Degrees of freedom of the test statistic
    pub degrees_of_freedom: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            false_alarm_probability: 1e-3,
            degrees_of_freedom: 2.0, // one complex correlation: |re|² + |im|²
        }
    }
}

impl ThresholdConfig {
    pub fn with_false_alarm_probability(mut self, pfa: f64) -> Self {
        self.false_alarm_probability = pfa;
        self
    }

    pub fn with_degrees_of_freedom(mut self, k: f64) -> Self {
        self.degrees_of_freedom = k;
        self
    }

    /// Threshold on the linear statistic
    pub fn threshold(&self) -> Result<f64, ChiSquaredError> {
        detection_threshold(self.false_alarm_probability, self.degrees_of_freedom)
    }

    /// Threshold in dB
    pub fn threshold_db(&self) -> Result<f64, ChiSquaredError> {
        Ok(db10(self.threshold()?))
    }
}
