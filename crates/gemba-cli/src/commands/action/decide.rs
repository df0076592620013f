use gemba_core::enums::Decision;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    decision: &str,
    note: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let decision: Decision = parse_enum(decision, "decision")?;
    let actor = resolve_actor(flags, None);
    let action = ctx.service.decide(id, decision, note, &actor)?;
    output(&action, flags.format)
}
