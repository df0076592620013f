use chrono::NaiveDate;
use gemba_engine::stats::action_status_counts;

use crate::cli::GlobalFlags;
use crate::commands::shared::clock::today_or;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    department: Option<&str>,
    today: Option<NaiveDate>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actions = ctx.service.actions()?;
    let counts = action_status_counts(&actions, &ctx.filter(department), today_or(today));
    output(&counts, flags.format)
}
