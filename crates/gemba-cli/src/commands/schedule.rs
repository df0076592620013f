mod add;
mod draft;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScheduleCommands;
use crate::context::AppContext;

/// Handle `gemba schedule`.
pub fn handle(action: &ScheduleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ScheduleCommands::Add {
            department,
            auditor,
            date,
        } => add::run(department, auditor, *date, ctx, flags),
        ScheduleCommands::List { department, limit } => {
            list::run(department.as_deref(), *limit, ctx, flags)
        }
        ScheduleCommands::Remove { id } => remove::run(id, ctx, flags),
        ScheduleCommands::Draft { id, interviewee } => draft::run(id, interviewee, ctx, flags),
    }
}
