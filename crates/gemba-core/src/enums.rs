//! Status enums, answer kinds, categories, and trail vocabulary for Gemba.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::policy::ScoreThresholds;

// ---------------------------------------------------------------------------
// CategoryId
// ---------------------------------------------------------------------------

/// One of the five fixed 5S compliance dimensions, in checklist order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Seiri,
    Seiton,
    Seiso,
    Seiketsu,
    Shitsuke,
}

impl CategoryId {
    /// All categories in checklist order.
    pub const ALL: [Self; 5] = [
        Self::Seiri,
        Self::Seiton,
        Self::Seiso,
        Self::Seiketsu,
        Self::Shitsuke,
    ];

    /// Whether a PARTIAL answer in this category must carry photo evidence.
    ///
    /// Shitsuke (discipline) findings are behavioural and often cannot be
    /// photographed, so evidence is optional there.
    #[must_use]
    pub const fn requires_evidence(self) -> bool {
        !matches!(self, Self::Shitsuke)
    }

    /// English name of the pillar.
    #[must_use]
    pub const fn pillar(self) -> &'static str {
        match self {
            Self::Seiri => "Sort",
            Self::Seiton => "Set in order",
            Self::Seiso => "Shine",
            Self::Seiketsu => "Standardize",
            Self::Shitsuke => "Sustain",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seiri => "seiri",
            Self::Seiton => "seiton",
            Self::Seiso => "seiso",
            Self::Seiketsu => "seiketsu",
            Self::Shitsuke => "shitsuke",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnswerKind
// ---------------------------------------------------------------------------

/// Compliance verdict for one checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Ok,
    Partial,
    NotApplicable,
}

impl AnswerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Partial => "partial",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreStatus
// ---------------------------------------------------------------------------

/// Label derived from an audit's overall score.
///
/// Always recomputed from the score, never stored as a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    NotApplicable,
    Excellent,
    Good,
    Critical,
}

impl ScoreStatus {
    /// Classify an overall score against the given thresholds.
    #[must_use]
    pub fn classify(score: Option<f64>, thresholds: &ScoreThresholds) -> Self {
        match score {
            None => Self::NotApplicable,
            Some(s) if s >= thresholds.excellent => Self::Excellent,
            Some(s) if s >= thresholds.good => Self::Good,
            Some(_) => Self::Critical,
        }
    }

    /// Human-facing label shown on reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "NA",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Critical => "Critical",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotApplicable => "not_applicable",
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionStatus
// ---------------------------------------------------------------------------

/// Status of a corrective action.
///
/// ```text
/// pending → executed → approved
///                    → rejected → executed (re-execution)
///         executed → executed (resubmitted before review)
/// ```
///
/// `approved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Pending,
    Executed,
    Approved,
    Rejected,
}

impl ActionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending | Self::Rejected => &[Self::Executed],
            Self::Executed => &[Self::Executed, Self::Approved, Self::Rejected],
            Self::Approved => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the action still needs work from the audited department.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Executed => "executed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Reviewer verdict on an executed corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// The action status this decision moves to.
    #[must_use]
    pub const fn status(self) -> ActionStatus {
        match self {
            Self::Approved => ActionStatus::Approved,
            Self::Rejected => ActionStatus::Rejected,
        }
    }

    /// The log entry kind recorded for this decision.
    #[must_use]
    pub const fn log_kind(self) -> LogKind {
        match self {
            Self::Approved => LogKind::Approval,
            Self::Rejected => LogKind::Rejection,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogKind
// ---------------------------------------------------------------------------

/// Kind of a corrective-action log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Execution,
    Approval,
    Rejection,
}

impl LogKind {
    /// The action status implied by an entry of this kind being the latest.
    #[must_use]
    pub const fn resulting_status(self) -> ActionStatus {
        match self {
            Self::Execution => ActionStatus::Executed,
            Self::Approval => ActionStatus::Approved,
            Self::Rejection => ActionStatus::Rejected,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Execution => "execution",
            Self::Approval => "approval",
            Self::Rejection => "rejection",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Entity types recorded in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Audit,
    Action,
    Schedule,
    Goal,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Action => "action",
            Self::Schedule => "schedule",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Operation type recorded in JSONL trail files.
///
/// - `Create`: full entity state
/// - `Delete`: entity removed (schedule retired or cancelled)
/// - `Transition`: full corrective action state after a lifecycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    Create,
    Delete,
    Transition,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(category_shitsuke, CategoryId, CategoryId::Shitsuke, "shitsuke");
    test_serde_roundtrip!(
        answer_not_applicable,
        AnswerKind,
        AnswerKind::NotApplicable,
        "not_applicable"
    );
    test_serde_roundtrip!(answer_partial, AnswerKind, AnswerKind::Partial, "partial");
    test_serde_roundtrip!(
        action_executed,
        ActionStatus,
        ActionStatus::Executed,
        "executed"
    );
    test_serde_roundtrip!(log_rejection, LogKind, LogKind::Rejection, "rejection");
    test_serde_roundtrip!(decision_approved, Decision, Decision::Approved, "approved");
    test_serde_roundtrip!(
        score_status_na,
        ScoreStatus,
        ScoreStatus::NotApplicable,
        "not_applicable"
    );
    test_serde_roundtrip!(
        trail_op_transition,
        TrailOp,
        TrailOp::Transition,
        "transition"
    );
    test_serde_roundtrip!(entity_action, EntityType, EntityType::Action, "action");

    // --- Transition tests ---

    #[test]
    fn action_valid_transitions() {
        assert!(ActionStatus::Pending.can_transition_to(ActionStatus::Executed));
        assert!(ActionStatus::Executed.can_transition_to(ActionStatus::Approved));
        assert!(ActionStatus::Executed.can_transition_to(ActionStatus::Rejected));
        assert!(ActionStatus::Executed.can_transition_to(ActionStatus::Executed));
        assert!(ActionStatus::Rejected.can_transition_to(ActionStatus::Executed));
    }

    #[test]
    fn action_invalid_transitions() {
        assert!(!ActionStatus::Pending.can_transition_to(ActionStatus::Approved));
        assert!(!ActionStatus::Pending.can_transition_to(ActionStatus::Rejected));
        assert!(!ActionStatus::Rejected.can_transition_to(ActionStatus::Approved));
        assert!(!ActionStatus::Approved.can_transition_to(ActionStatus::Executed));
    }

    #[test]
    fn approved_is_terminal() {
        assert!(ActionStatus::Approved.allowed_next_states().is_empty());
    }

    #[test]
    fn log_kind_matches_decision() {
        for decision in [Decision::Approved, Decision::Rejected] {
            assert_eq!(decision.log_kind().resulting_status(), decision.status());
        }
        assert_eq!(
            LogKind::Execution.resulting_status(),
            ActionStatus::Executed
        );
    }

    #[test]
    fn only_shitsuke_waives_evidence() {
        let waived: Vec<_> = CategoryId::ALL
            .into_iter()
            .filter(|c| !c.requires_evidence())
            .collect();
        assert_eq!(waived, vec![CategoryId::Shitsuke]);
    }

    #[test]
    fn categories_sort_in_checklist_order() {
        let mut shuffled = vec![
            CategoryId::Shitsuke,
            CategoryId::Seiri,
            CategoryId::Seiketsu,
            CategoryId::Seiton,
            CategoryId::Seiso,
        ];
        shuffled.sort();
        assert_eq!(shuffled, CategoryId::ALL.to_vec());
    }

    #[test]
    fn score_status_thresholds() {
        let t = ScoreThresholds::default();
        assert_eq!(ScoreStatus::classify(None, &t), ScoreStatus::NotApplicable);
        assert_eq!(ScoreStatus::classify(Some(10.0), &t), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::classify(Some(9.0), &t), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::classify(Some(8.99), &t), ScoreStatus::Good);
        assert_eq!(ScoreStatus::classify(Some(7.0), &t), ScoreStatus::Good);
        assert_eq!(ScoreStatus::classify(Some(6.9), &t), ScoreStatus::Critical);
        assert_eq!(ScoreStatus::classify(Some(0.0), &t), ScoreStatus::Critical);
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", CategoryId::Seiketsu), "seiketsu");
        assert_eq!(format!("{}", AnswerKind::NotApplicable), "not_applicable");
        assert_eq!(format!("{}", ActionStatus::Rejected), "rejected");
        assert_eq!(format!("{}", LogKind::Approval), "approval");
        assert_eq!(format!("{}", Decision::Rejected), "rejected");
        assert_eq!(format!("{}", EntityType::Schedule), "schedule");
        assert_eq!(format!("{}", TrailOp::Delete), "delete");
    }

    #[test]
    fn score_status_labels() {
        assert_eq!(ScoreStatus::NotApplicable.label(), "NA");
        assert_eq!(ScoreStatus::Excellent.label(), "Excellent");
        assert_eq!(ScoreStatus::Good.label(), "Good");
        assert_eq!(ScoreStatus::Critical.label(), "Critical");
    }
}
