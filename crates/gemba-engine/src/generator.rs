//! Audit finalization and corrective-action generation.
//!
//! `finalize` validates a draft, scores it, freezes it into an
//! [`AuditRecord`], and spawns one PENDING [`CorrectiveAction`] per PARTIAL
//! answer. Nothing is produced unless the whole draft validates.

use chrono::{Days, NaiveDate};
use gemba_core::catalog::Catalog;
use gemba_core::entities::{Answer, AuditDraft, AuditRecord, CorrectiveAction};
use gemba_core::enums::{ActionStatus, AnswerKind};
use gemba_core::errors::CoreError;
use gemba_core::ids::{self, PREFIX_AUDIT};
use gemba_core::policy::AuditPolicy;
use gemba_core::responses::FinalizedAudit;

use crate::scoring::compute_score;

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Check the fields required before an audit can start.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the department or interviewee is missing.
pub fn validate_start(draft: &AuditDraft) -> Result<(), CoreError> {
    if draft.department.trim().is_empty() {
        return Err(CoreError::Validation("department is required".into()));
    }
    if draft.interviewee_name.trim().is_empty() {
        return Err(CoreError::Validation("interviewee is required".into()));
    }
    Ok(())
}

fn validate_answer(question_id: u32, answer: &Answer, catalog: &Catalog) -> Result<(), CoreError> {
    if !answer.score_matches_kind() {
        return Err(CoreError::Validation(format!(
            "question {question_id}: score {:?} is not valid for a '{}' answer",
            answer.score, answer.kind
        )));
    }

    if answer.kind != AnswerKind::Partial {
        return Ok(());
    }

    if is_blank(answer.corrective_text.as_deref()) {
        return Err(CoreError::Validation(format!(
            "question {question_id}: a partial answer needs a corrective action description"
        )));
    }

    match catalog.category_of(question_id) {
        Some(category) if category.requires_evidence() => {
            if is_blank(answer.evidence_ref.as_deref()) {
                return Err(CoreError::Validation(format!(
                    "question {question_id}: evidence is required for partial answers in {category}"
                )));
            }
        }
        Some(_) => {}
        None => {
            tracing::warn!(question_id, "answer references a question missing from the catalog");
        }
    }

    Ok(())
}

/// Validate a draft as a whole.
///
/// # Errors
///
/// Returns the first `CoreError::Validation` found.
pub fn validate_draft(draft: &AuditDraft, catalog: &Catalog) -> Result<(), CoreError> {
    validate_start(draft)?;
    for (question_id, answer) in &draft.answers {
        validate_answer(*question_id, answer, catalog)?;
    }
    Ok(())
}

/// Deadline of an action created on `created`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the result falls outside chrono's range.
pub fn deadline_for(created: NaiveDate, days: u32) -> Result<NaiveDate, CoreError> {
    created
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| CoreError::Validation(format!("deadline overflow from {created}")))
}

/// Finalize a draft into a scored record and its corrective actions.
///
/// An unset draft date defaults to `today`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the draft is incomplete, or
/// `CoreError::Other` if an ID cannot be generated.
pub fn finalize(
    draft: AuditDraft,
    catalog: &Catalog,
    policy: &AuditPolicy,
    today: NaiveDate,
) -> Result<FinalizedAudit, CoreError> {
    validate_draft(&draft, catalog)?;

    let date = draft.date.unwrap_or(today);
    let deadline = deadline_for(date, policy.deadline_days)?;
    let breakdown = compute_score(&draft.department, &draft.answers, catalog);
    let audit_id = ids::generate_id(PREFIX_AUDIT)?;

    let actions: Vec<CorrectiveAction> = draft
        .answers
        .iter()
        .filter(|(_, answer)| answer.kind == AnswerKind::Partial)
        .map(|(question_id, answer)| {
            let question_text = catalog.question_text(*question_id).unwrap_or_else(|| {
                tracing::warn!(
                    audit_id = %audit_id,
                    question_id,
                    "no catalog entry for question; action created without text"
                );
                ""
            });
            CorrectiveAction {
                id: ids::action_id(&audit_id, *question_id),
                source_audit_id: audit_id.clone(),
                created_date: date,
                deadline,
                department: draft.department.clone(),
                auditor_name: draft.auditor_name.clone(),
                question_id: *question_id,
                question_text: question_text.to_string(),
                issue_description: answer.corrective_text.clone().unwrap_or_default(),
                original_evidence_ref: answer.evidence_ref.clone(),
                status: ActionStatus::Pending,
                execution_text: None,
                execution_evidence_ref: None,
                log: Vec::new(),
            }
        })
        .collect();

    let retire_schedule = draft.schedule_id.clone();

    let record = AuditRecord {
        id: audit_id,
        date,
        department: draft.department,
        auditor_name: draft.auditor_name,
        interviewee_name: draft.interviewee_name,
        answers: draft.answers,
        signatures: draft.signatures,
        overall_score: breakdown.overall_score,
        category_scores: breakdown.per_category,
        schedule_id: draft.schedule_id,
    };

    tracing::debug!(
        audit_id = %record.id,
        department = %record.department,
        score = ?record.overall_score,
        actions = actions.len(),
        "audit finalized"
    );

    Ok(FinalizedAudit {
        record,
        actions,
        retire_schedule,
    })
}
