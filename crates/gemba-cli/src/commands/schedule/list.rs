use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    department: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ctx.filter(department);
    let schedules = ctx
        .service
        .schedules()?
        .into_iter()
        .filter(|s| filter.matches(&s.department))
        .collect::<Vec<_>>();

    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(schedules, limit), flags.format)
}
