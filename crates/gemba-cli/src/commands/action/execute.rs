use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    text: &str,
    evidence: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = resolve_actor(flags, None);
    let action = ctx.service.submit_execution(id, text, evidence, &actor)?;
    output(&action, flags.format)
}
