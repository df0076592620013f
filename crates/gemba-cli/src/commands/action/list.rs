use chrono::{Local, NaiveDate};
use gemba_core::enums::ActionStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ActionRow {
    id: String,
    department: String,
    question_id: u32,
    status: ActionStatus,
    deadline: NaiveDate,
    overdue: bool,
    issue_description: String,
}

pub fn run(
    department: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<ActionStatus>(raw, "status"))
        .transpose()?;
    let today = Local::now().date_naive();

    let rows = ctx
        .service
        .list_actions(&ctx.filter(department))?
        .into_iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .map(|a| ActionRow {
            overdue: a.is_overdue(today),
            id: a.id,
            department: a.department,
            question_id: a.question_id,
            status: a.status,
            deadline: a.deadline,
            issue_description: a.issue_description,
        })
        .collect::<Vec<_>>();

    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(rows, limit), flags.format)
}
