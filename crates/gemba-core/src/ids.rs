//! ID prefix constants and generation.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, e.g. `aud-a3f8b2c1`.
//! Corrective actions derive their ID from the source audit and question so
//! that one audit can never produce two actions for the same question.

use crate::errors::CoreError;

pub const PREFIX_AUDIT: &str = "aud";
pub const PREFIX_ACTION: &str = "act";
pub const PREFIX_SCHEDULE: &str = "sch";
pub const PREFIX_GOAL: &str = "gol";

/// Generate a random prefixed ID.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate id: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// ID of the corrective action spawned by `question_id` in audit `audit_id`.
#[must_use]
pub fn action_id(audit_id: &str, question_id: u32) -> String {
    let suffix = audit_id
        .strip_prefix(PREFIX_AUDIT)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(audit_id);
    format!("{PREFIX_ACTION}-{suffix}-q{question_id}")
}
