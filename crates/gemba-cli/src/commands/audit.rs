mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::context::AppContext;

/// Handle `gemba audit`.
pub fn handle(action: &AuditCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuditCommands::List { department, limit } => {
            list::run(department.as_deref(), *limit, ctx, flags)
        }
        AuditCommands::Get { id } => get::run(id, ctx, flags),
    }
}
