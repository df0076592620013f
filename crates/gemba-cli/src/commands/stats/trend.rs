use gemba_engine::stats::trend_series;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(department: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = ctx.service.history()?;
    let series = trend_series(
        &history,
        &ctx.filter(department),
        ctx.service.policy().trend_target,
    );
    output(&series, flags.format)
}
