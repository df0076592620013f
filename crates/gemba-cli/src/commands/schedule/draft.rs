use gemba_core::entities::AuditDraft;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print a draft for the planned audit, ready to be answered and finalized.
pub fn run(id: &str, interviewee: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schedule = ctx.service.get_schedule(id)?;
    let mut draft = AuditDraft::from_schedule(&schedule);
    draft.interviewee_name = interviewee.trim().to_string();
    output(&draft, flags.format)
}
