use gemba_engine::agenda::agenda;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AgendaArgs;
use crate::commands::shared::clock::today_or;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gemba agenda`.
pub fn handle(args: &AgendaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schedules = ctx.service.schedules()?;
    let actions = ctx.service.actions()?;
    let filter = ctx.filter(args.department.as_deref());

    let items = agenda(&schedules, &actions, &filter, today_or(args.today));
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    output(&truncate(items, limit), flags.format)
}
