use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Answer, Signatures};
use crate::enums::{CategoryId, ScoreStatus};
use crate::policy::ScoreThresholds;

/// A finalized, scored audit. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditRecord {
    pub id: String,
    pub date: NaiveDate,
    pub department: String,
    pub auditor_name: String,
    pub interviewee_name: String,
    pub answers: BTreeMap<u32, Answer>,
    pub signatures: Signatures,
    pub overall_score: Option<f64>,
    pub category_scores: BTreeMap<CategoryId, Option<f64>>,
    #[serde(default)]
    pub schedule_id: Option<String>,
}

impl AuditRecord {
    /// Status label derived from the overall score.
    #[must_use]
    pub fn status(&self, thresholds: &ScoreThresholds) -> ScoreStatus {
        ScoreStatus::classify(self.overall_score, thresholds)
    }

    /// Stored score for one category, `None` when the category did not apply.
    #[must_use]
    pub fn category_score(&self, category: CategoryId) -> Option<f64> {
        self.category_scores.get(&category).copied().flatten()
    }
}
