use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionStatus, LogKind};

/// One append-only entry in a corrective action's history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub actor: String,
    pub timestamp: DateTime<Utc>,
    /// Execution description or reviewer note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_ref: Option<String>,
}

/// A remediation item spawned by a partially-compliant answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CorrectiveAction {
    pub id: String,
    pub source_audit_id: String,
    pub created_date: NaiveDate,
    pub deadline: NaiveDate,
    pub department: String,
    pub auditor_name: String,
    pub question_id: u32,
    pub question_text: String,
    pub issue_description: String,
    pub original_evidence_ref: Option<String>,
    pub status: ActionStatus,
    pub execution_text: Option<String>,
    pub execution_evidence_ref: Option<String>,
    pub log: Vec<LogEntry>,
}

impl CorrectiveAction {
    /// Most recent log entry, if any.
    #[must_use]
    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.log.last()
    }

    /// Past its deadline while still awaiting work.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status.is_open() && today > self.deadline
    }
}
