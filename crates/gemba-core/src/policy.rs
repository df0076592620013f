//! Scoring thresholds and corrective-action policy.
//!
//! Defaults match the 5S programme rules: 9+ is excellent, 7+ is good,
//! corrective actions are due 30 days after the audit, and the trend chart
//! reference line sits at 8.0. Hosts override these through `gemba-config`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 9.0;
pub const DEFAULT_GOOD_THRESHOLD: f64 = 7.0;
pub const DEFAULT_DEADLINE_DAYS: u32 = 30;
pub const DEFAULT_TREND_TARGET: f64 = 8.0;

/// Lower bounds (inclusive) of the score status bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreThresholds {
    pub excellent: f64,
    pub good: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            excellent: DEFAULT_EXCELLENT_THRESHOLD,
            good: DEFAULT_GOOD_THRESHOLD,
        }
    }
}

/// Rules applied when an audit is finalized and reported on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditPolicy {
    pub thresholds: ScoreThresholds,
    /// Days between the audit date and a corrective action's deadline.
    pub deadline_days: u32,
    /// Reference line emitted with every trend point.
    pub trend_target: f64,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            thresholds: ScoreThresholds::default(),
            deadline_days: DEFAULT_DEADLINE_DAYS,
            trend_target: DEFAULT_TREND_TARGET,
        }
    }
}
