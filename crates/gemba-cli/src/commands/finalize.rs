use gemba_core::responses::FinalizeResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FinalizeArgs;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::clock::today_or;
use crate::commands::shared::draft::read_draft;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gemba finalize`.
pub fn handle(args: &FinalizeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = read_draft(&args.file)?;
    let actor = resolve_actor(flags, Some(&draft.auditor_name));
    let finalized = ctx
        .service
        .finalize_audit(draft, &actor, today_or(args.today))?;

    output(
        &FinalizeResponse::from_finalized(&finalized, &ctx.service.policy().thresholds),
        flags.format,
    )
}
