use gemba_engine::stats::category_averages;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(department: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = ctx.service.history()?;
    output(&category_averages(&history, &ctx.filter(department)), flags.format)
}
