mod decide;
mod execute;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActionCommands;
use crate::context::AppContext;

/// Handle `gemba action`.
pub fn handle(action: &ActionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ActionCommands::List {
            department,
            status,
            limit,
        } => list::run(department.as_deref(), status.as_deref(), *limit, ctx, flags),
        ActionCommands::Get { id } => get::run(id, ctx, flags),
        ActionCommands::Execute { id, text, evidence } => {
            execute::run(id, text, evidence, ctx, flags)
        }
        ActionCommands::Decide { id, decision, note } => {
            decide::run(id, decision, note, ctx, flags)
        }
    }
}
