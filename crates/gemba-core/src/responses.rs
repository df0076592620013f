//! Projection and response shapes handed to reporting consumers.
//!
//! These are plain nested records; they carry no behaviour beyond
//! formatting helpers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuditRecord, CorrectiveAction};
use crate::enums::{CategoryId, ScoreStatus};
use crate::policy::ScoreThresholds;

/// Per-category and overall scores for one audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreBreakdown {
    pub overall_score: Option<f64>,
    pub per_category: BTreeMap<CategoryId, Option<f64>>,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn status(&self, thresholds: &ScoreThresholds) -> ScoreStatus {
        ScoreStatus::classify(self.overall_score, thresholds)
    }
}

/// Output of audit finalization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FinalizedAudit {
    pub record: AuditRecord,
    pub actions: Vec<CorrectiveAction>,
    /// Schedule the host must retire, when the audit fulfilled one.
    pub retire_schedule: Option<String>,
}

/// Response from `gemba finalize`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FinalizeResponse {
    pub audit_id: String,
    pub overall_score: Option<f64>,
    pub status: String,
    pub actions_created: Vec<String>,
    pub retired_schedule: Option<String>,
}

impl FinalizeResponse {
    #[must_use]
    pub fn from_finalized(finalized: &FinalizedAudit, thresholds: &ScoreThresholds) -> Self {
        Self {
            audit_id: finalized.record.id.clone(),
            overall_score: finalized.record.overall_score,
            status: finalized.record.status(thresholds).as_str().to_string(),
            actions_created: finalized.actions.iter().map(|a| a.id.clone()).collect(),
            retired_schedule: finalized.retire_schedule.clone(),
        }
    }
}

/// Calendar month key used by the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(into = "String", try_from = "String")]
#[schemars(with = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got '{value}'"))?;
        let year: i32 = year.parse().map_err(|_| format!("bad year in '{value}'"))?;
        let month: u32 = month.parse().map_err(|_| format!("bad month in '{value}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in '{value}'"));
        }
        Ok(Self { year, month })
    }
}

/// One month of the trend series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrendPoint {
    pub month: YearMonth,
    /// Mean over the filtered subset; absent when it has no scored audit that month.
    pub filtered_mean: Option<f64>,
    /// Mean over every audit that month.
    pub global_mean: Option<f64>,
    pub target: f64,
}

/// A department's place in the ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankingEntry {
    pub department: String,
    pub mean_score: Option<f64>,
    pub audit_count: usize,
}

/// Mean stored score of one category across audits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryAverage {
    pub category: CategoryId,
    pub average: Option<f64>,
    /// Audits in which the category produced a score.
    pub samples: usize,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Kpis {
    pub total_audits: usize,
    pub filtered_mean: Option<f64>,
    pub global_mean: Option<f64>,
}

/// Corrective actions counted by status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionStatusCounts {
    pub pending: usize,
    pub executed: usize,
    pub approved: usize,
    pub rejected: usize,
    pub overdue: usize,
}

/// What an agenda row refers to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgendaEntry {
    ScheduledAudit {
        schedule_id: String,
        auditor_name: String,
    },
    ActionDeadline {
        action_id: String,
        issue_description: String,
        overdue: bool,
    },
}

/// One dated row of the agenda.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgendaItem {
    pub date: NaiveDate,
    pub department: String,
    pub entry: AgendaEntry,
}

/// Target vs. achieved score for one category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GoalRow {
    pub category: CategoryId,
    pub target: f64,
    pub actual: Option<f64>,
    pub met: bool,
}

/// Attainment of one goal over the audits inside its window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GoalAttainment {
    pub goal_id: String,
    pub department: String,
    pub audits_considered: usize,
    pub rows: Vec<GoalRow>,
}

/// Response from `gemba rebuild`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RebuildResponse {
    pub rebuilt: bool,
    pub trail_files: u32,
    pub operations_replayed: u32,
    pub entities_created: u32,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_serializes_as_string() {
        let ym = YearMonth::of(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"2024-03\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }

    #[test]
    fn year_month_orders_chronologically() {
        let dec = YearMonth { year: 2023, month: 12 };
        let jan = YearMonth { year: 2024, month: 1 };
        assert!(dec < jan);
    }

    #[test]
    fn year_month_rejects_garbage() {
        assert!(serde_json::from_str::<YearMonth>("\"2024-13\"").is_err());
        assert!(serde_json::from_str::<YearMonth>("\"march\"").is_err());
    }

    #[test]
    fn agenda_entry_is_internally_tagged() {
        let entry = AgendaEntry::ScheduledAudit {
            schedule_id: "sch-1".into(),
            auditor_name: "Ana".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["kind"], "scheduled_audit");
        assert_eq!(value["schedule_id"], "sch-1");
    }
}
