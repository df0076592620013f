use std::collections::BTreeMap;

use gemba_core::enums::{CategoryId, ScoreStatus};
use gemba_engine::compute_score;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::commands::shared::draft::read_draft;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScoreResponse {
    department: String,
    overall_score: Option<f64>,
    status: ScoreStatus,
    label: &'static str,
    per_category: BTreeMap<CategoryId, Option<f64>>,
    /// Applicable questions the draft has not answered yet.
    unanswered: Vec<u32>,
}

/// Handle `gemba score`.
pub fn handle(args: &DraftArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = read_draft(&args.file)?;
    let catalog = ctx.service.catalog();
    let breakdown = compute_score(&draft.department, &draft.answers, catalog);
    let status = breakdown.status(&ctx.service.policy().thresholds);

    output(
        &ScoreResponse {
            unanswered: catalog.unanswered_questions(&draft),
            department: draft.department,
            overall_score: breakdown.overall_score,
            status,
            label: status.label(),
            per_category: breakdown.per_category,
        },
        flags.format,
    )
}
