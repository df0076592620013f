//! Corrective-action state machine.
//!
//! Each operation takes the current action by reference and returns the
//! next value. A failed operation leaves the caller's copy untouched, and a
//! successful one appends exactly one [`LogEntry`].
//!
//! Input validation runs before the state check, so an empty rejection note
//! is reported as a validation error even on an action in the wrong state.

use chrono::{DateTime, Utc};
use gemba_core::entities::{CorrectiveAction, LogEntry};
use gemba_core::enums::{ActionStatus, Decision, EntityType, LogKind};
use gemba_core::errors::CoreError;

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn ensure_transition(action: &CorrectiveAction, to: ActionStatus) -> Result<(), CoreError> {
    if action.status.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity_type: EntityType::Action.to_string(),
            id: action.id.clone(),
            from: action.status.to_string(),
            to: to.to_string(),
        })
    }
}

/// Record the department's fix for an action.
///
/// # Errors
///
/// `CoreError::Validation` if `text` or `evidence_ref` is blank,
/// `CoreError::InvalidTransition` if the action is already approved.
pub fn submit_execution(
    action: &CorrectiveAction,
    text: &str,
    evidence_ref: &str,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<CorrectiveAction, CoreError> {
    let text = non_empty(text)
        .ok_or_else(|| CoreError::Validation("execution description is required".into()))?;
    let evidence_ref = non_empty(evidence_ref)
        .ok_or_else(|| CoreError::Validation("execution evidence is required".into()))?;
    ensure_transition(action, ActionStatus::Executed)?;

    let mut next = action.clone();
    next.status = ActionStatus::Executed;
    next.execution_text = Some(text.to_string());
    next.execution_evidence_ref = Some(evidence_ref.to_string());
    next.log.push(LogEntry {
        kind: LogKind::Execution,
        actor: actor.to_string(),
        timestamp: at,
        note: Some(text.to_string()),
        evidence_ref: Some(evidence_ref.to_string()),
    });

    tracing::debug!(action_id = %next.id, actor, "execution submitted");
    Ok(next)
}

/// Approve or reject an executed action.
///
/// # Errors
///
/// `CoreError::Validation` if a rejection has a blank note,
/// `CoreError::InvalidTransition` unless the action is executed.
pub fn decide(
    action: &CorrectiveAction,
    decision: Decision,
    note: &str,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<CorrectiveAction, CoreError> {
    let note = non_empty(note);
    if decision == Decision::Rejected && note.is_none() {
        return Err(CoreError::Validation(
            "a rejection needs a note explaining what is missing".into(),
        ));
    }
    let to = decision.status();
    ensure_transition(action, to)?;

    let mut next = action.clone();
    next.status = to;
    next.log.push(LogEntry {
        kind: decision.log_kind(),
        actor: actor.to_string(),
        timestamp: at,
        note: note.map(String::from),
        evidence_ref: None,
    });

    tracing::debug!(action_id = %next.id, actor, %decision, "action reviewed");
    Ok(next)
}

/// Status implied by a log: the latest entry's outcome, or pending.
#[must_use]
pub fn status_from_log(log: &[LogEntry]) -> ActionStatus {
    log.last()
        .map_or(ActionStatus::Pending, |entry| entry.kind.resulting_status())
}

/// Check that an action's stored status agrees with its log and that the
/// log itself only contains allowed transitions.
///
/// # Errors
///
/// `CoreError::InvalidTransition` naming the first offending step.
pub fn verify(action: &CorrectiveAction) -> Result<(), CoreError> {
    let mut status = ActionStatus::Pending;
    for entry in &action.log {
        let to = entry.kind.resulting_status();
        if !status.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                entity_type: EntityType::Action.to_string(),
                id: action.id.clone(),
                from: status.to_string(),
                to: to.to_string(),
            });
        }
        status = to;
    }
    if status == action.status {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity_type: EntityType::Action.to_string(),
            id: action.id.clone(),
            from: status.to_string(),
            to: action.status.to_string(),
        })
    }
}
