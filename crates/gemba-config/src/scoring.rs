//! Score classification and trend reference settings.

use gemba_core::policy::{
    DEFAULT_EXCELLENT_THRESHOLD, DEFAULT_GOOD_THRESHOLD, DEFAULT_TREND_TARGET, ScoreThresholds,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_excellent_threshold() -> f64 {
    DEFAULT_EXCELLENT_THRESHOLD
}

const fn default_good_threshold() -> f64 {
    DEFAULT_GOOD_THRESHOLD
}

const fn default_trend_target() -> f64 {
    DEFAULT_TREND_TARGET
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Lowest overall score labelled "Excellent".
    #[serde(default = "default_excellent_threshold")]
    pub excellent_threshold: f64,

    /// Lowest overall score labelled "Good". Anything below is "Critical".
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f64,

    /// Reference line drawn on the monthly trend series.
    #[serde(default = "default_trend_target")]
    pub trend_target: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excellent_threshold: default_excellent_threshold(),
            good_threshold: default_good_threshold(),
            trend_target: default_trend_target(),
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub const fn thresholds(&self) -> ScoreThresholds {
        ScoreThresholds {
            excellent: self.excellent_threshold,
            good: self.good_threshold,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scoring.excellent_threshold", self.excellent_threshold),
            ("scoring.good_threshold", self.good_threshold),
            ("scoring.trend_target", self.trend_target),
        ] {
            if !(0.0..=10.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("{value} is outside 0..=10")));
            }
        }
        if self.good_threshold > self.excellent_threshold {
            return Err(ConfigError::invalid(
                "scoring.good_threshold",
                format!(
                    "{} is above excellent_threshold {}",
                    self.good_threshold, self.excellent_threshold
                ),
            ));
        }
        Ok(())
    }
}
