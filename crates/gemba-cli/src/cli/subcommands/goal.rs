use chrono::NaiveDate;
use clap::Subcommand;

/// Department goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Set category targets for a department over a date window.
    Add {
        #[arg(long)]
        department: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// category=score, repeatable (e.g. `--target seiri=8`)
        #[arg(long, required = true)]
        target: Vec<String>,
    },
    /// List goals.
    List {
        #[arg(long)]
        department: Option<String>,
    },
    /// Remove a goal.
    Remove { id: String },
}
