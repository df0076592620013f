use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Catalog(args) => commands::catalog::handle(&args, ctx, flags),
        Commands::Score(args) => commands::score::handle(&args, ctx, flags),
        Commands::Finalize(args) => commands::finalize::handle(&args, ctx, flags),
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags),
        Commands::Action { action } => commands::action::handle(&action, ctx, flags),
        Commands::Schedule { action } => commands::schedule::handle(&action, ctx, flags),
        Commands::Goal { action } => commands::goal::handle(&action, ctx, flags),
        Commands::Stats { action } => commands::stats::handle(&action, ctx, flags),
        Commands::Agenda(args) => commands::agenda::handle(&args, ctx, flags),
        Commands::Rebuild(args) => commands::rebuild::handle(&args, ctx, flags),
    }
}
