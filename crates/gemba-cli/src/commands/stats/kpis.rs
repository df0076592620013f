use gemba_engine::stats::kpis;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(department: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = ctx.service.history()?;
    output(&kpis(&history, &ctx.filter(department)), flags.format)
}
