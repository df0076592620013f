use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(department: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = ctx.filter(department);
    let goals = ctx
        .service
        .goals()?
        .into_iter()
        .filter(|g| filter.matches(&g.department))
        .collect::<Vec<_>>();
    output(&goals, flags.format)
}
