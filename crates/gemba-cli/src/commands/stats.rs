mod actions;
mod categories;
mod goals;
mod kpis;
mod ranking;
mod trend;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StatsCommands;
use crate::context::AppContext;

/// Handle `gemba stats`.
pub fn handle(action: &StatsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StatsCommands::Trend { department } => trend::run(department.as_deref(), ctx, flags),
        StatsCommands::Ranking => ranking::run(ctx, flags),
        StatsCommands::Categories { department } => {
            categories::run(department.as_deref(), ctx, flags)
        }
        StatsCommands::Kpis { department } => kpis::run(department.as_deref(), ctx, flags),
        StatsCommands::Goals { department, today } => {
            goals::run(department.as_deref(), *today, ctx, flags)
        }
        StatsCommands::Actions { department, today } => {
            actions::run(department.as_deref(), *today, ctx, flags)
        }
    }
}
