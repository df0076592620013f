use gemba_engine::stats::department_ranking;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// The ranking always spans every department.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = ctx.service.history()?;
    output(&department_ranking(&history), flags.format)
}
