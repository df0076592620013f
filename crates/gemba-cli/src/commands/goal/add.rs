use chrono::NaiveDate;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::parse::parse_targets;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    department: &str,
    start: NaiveDate,
    end: NaiveDate,
    targets: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let targets = parse_targets(targets)?;
    let actor = resolve_actor(flags, None);
    let goal = ctx.service.add_goal(department, start, end, targets, &actor)?;
    output(&goal, flags.format)
}
