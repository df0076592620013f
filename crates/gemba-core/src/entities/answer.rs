use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Schedule;
use crate::enums::AnswerKind;

/// Score recorded for an `Ok` answer.
pub const FULL_SCORE: u8 = 10;
/// Highest score a `Partial` answer may carry.
pub const MAX_PARTIAL_SCORE: u8 = 9;

/// The auditor's verdict on one question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub kind: AnswerKind,
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrective_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_ref: Option<String>,
}

impl Answer {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            kind: AnswerKind::Ok,
            score: Some(FULL_SCORE),
            corrective_text: None,
            evidence_ref: None,
        }
    }

    #[must_use]
    pub const fn not_applicable() -> Self {
        Self {
            kind: AnswerKind::NotApplicable,
            score: None,
            corrective_text: None,
            evidence_ref: None,
        }
    }

    #[must_use]
    pub fn partial(score: u8, corrective_text: &str, evidence_ref: Option<&str>) -> Self {
        Self {
            kind: AnswerKind::Partial,
            score: Some(score),
            corrective_text: Some(corrective_text.to_string()),
            evidence_ref: evidence_ref.map(String::from),
        }
    }

    /// Whether `score` agrees with `kind`.
    #[must_use]
    pub const fn score_matches_kind(&self) -> bool {
        match (self.kind, self.score) {
            (AnswerKind::Ok, Some(s)) => s == FULL_SCORE,
            (AnswerKind::Partial, Some(s)) => s <= MAX_PARTIAL_SCORE,
            (AnswerKind::NotApplicable, None) => true,
            _ => false,
        }
    }

    /// Whether the answer contributes to category scores.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        !matches!(self.kind, AnswerKind::NotApplicable) && self.score.is_some()
    }
}

/// Opaque references to the captured signature images.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Signatures {
    pub auditor: Option<String>,
    pub interviewee: Option<String>,
}

/// An audit being filled in, before finalization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditDraft {
    pub department: String,
    pub auditor_name: String,
    pub interviewee_name: String,
    /// Falls back to the finalization day when unset.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub answers: BTreeMap<u32, Answer>,
    #[serde(default)]
    pub signatures: Signatures,
    /// Schedule this audit fulfils, retired on finalization.
    #[serde(default)]
    pub schedule_id: Option<String>,
}

impl AuditDraft {
    #[must_use]
    pub fn new(department: &str, auditor_name: &str, interviewee_name: &str) -> Self {
        Self {
            department: department.to_string(),
            auditor_name: auditor_name.to_string(),
            interviewee_name: interviewee_name.to_string(),
            date: None,
            answers: BTreeMap::new(),
            signatures: Signatures::default(),
            schedule_id: None,
        }
    }

    /// Start a draft from a planned audit; the interviewee is filled in later.
    #[must_use]
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            date: Some(schedule.date),
            schedule_id: Some(schedule.id.clone()),
            ..Self::new(&schedule.department, &schedule.auditor_name, "")
        }
    }

    #[must_use]
    pub fn with_answer(mut self, question_id: u32, answer: Answer) -> Self {
        self.answers.insert(question_id, answer);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_satisfy_invariant() {
        assert!(Answer::ok().score_matches_kind());
        assert!(Answer::not_applicable().score_matches_kind());
        assert!(Answer::partial(0, "fix", None).score_matches_kind());
        assert!(Answer::partial(9, "fix", Some("img")).score_matches_kind());
    }

    #[test]
    fn inconsistent_scores_detected() {
        let mut ok = Answer::ok();
        ok.score = Some(8);
        assert!(!ok.score_matches_kind());

        assert!(!Answer::partial(10, "fix", None).score_matches_kind());

        let mut na = Answer::not_applicable();
        na.score = Some(5);
        assert!(!na.score_matches_kind());

        let mut unscored = Answer::partial(4, "fix", None);
        unscored.score = None;
        assert!(!unscored.score_matches_kind());
    }

    #[test]
    fn not_applicable_is_never_scored() {
        assert!(!Answer::not_applicable().is_scored());
        assert!(Answer::ok().is_scored());
        assert!(Answer::partial(3, "x", None).is_scored());
    }

    #[test]
    fn draft_from_schedule_carries_date_and_id() {
        let schedule = Schedule {
            id: "sch-00000001".into(),
            department: "Maintenance".into(),
            auditor_name: "Ana".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        };
        let draft = AuditDraft::from_schedule(&schedule);
        assert_eq!(draft.department, "Maintenance");
        assert_eq!(draft.date, Some(schedule.date));
        assert_eq!(draft.schedule_id.as_deref(), Some("sch-00000001"));
        assert!(draft.interviewee_name.is_empty());
    }
}
