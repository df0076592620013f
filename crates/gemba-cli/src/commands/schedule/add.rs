use chrono::NaiveDate;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    department: &str,
    auditor: &str,
    date: NaiveDate,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let schedule = ctx.service.add_schedule(department, auditor, date)?;
    output(&schedule, flags.format)
}
