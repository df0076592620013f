use std::cmp::Reverse;

use chrono::NaiveDate;
use gemba_core::enums::ScoreStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditRow {
    id: String,
    date: NaiveDate,
    department: String,
    auditor_name: String,
    overall_score: Option<f64>,
    status: ScoreStatus,
}

pub fn run(
    department: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ctx.filter(department);
    let thresholds = ctx.service.policy().thresholds;

    let mut rows = ctx
        .service
        .history()?
        .into_iter()
        .filter(|r| filter.matches(&r.department))
        .map(|r| AuditRow {
            status: r.status(&thresholds),
            id: r.id,
            date: r.date,
            department: r.department,
            auditor_name: r.auditor_name,
            overall_score: r.overall_score,
        })
        .collect::<Vec<_>>();
    rows.sort_by_key(|row| Reverse(row.date));

    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(rows, limit), flags.format)
}
