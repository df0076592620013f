use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.service.remove_goal(id, &resolve_actor(flags, None))?;
    output(&removed, flags.format)
}
