mod add;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::context::AppContext;

/// Handle `gemba goal`.
pub fn handle(action: &GoalCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GoalCommands::Add {
            department,
            start,
            end,
            target,
        } => add::run(department, *start, *end, target, ctx, flags),
        GoalCommands::List { department } => list::run(department.as_deref(), ctx, flags),
        GoalCommands::Remove { id } => remove::run(id, ctx, flags),
    }
}
