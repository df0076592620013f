use gemba_core::entities::AuditRecord;
use gemba_core::enums::ScoreStatus;
use gemba_engine::stats::previous_score;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditReport {
    #[serde(flatten)]
    record: AuditRecord,
    status: ScoreStatus,
    /// Score of the department's latest earlier audit.
    previous_score: Option<f64>,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.service.get_audit(id)?;
    let history = ctx.service.history()?;

    output(
        &AuditReport {
            status: record.status(&ctx.service.policy().thresholds),
            previous_score: previous_score(&history, &record),
            record,
        },
        flags.format,
    )
}
