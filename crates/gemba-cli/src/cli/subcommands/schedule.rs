use chrono::NaiveDate;
use clap::Subcommand;

/// Planned audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Plan an audit.
    Add {
        #[arg(long)]
        department: String,
        #[arg(long)]
        auditor: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// List planned audits by date.
    List {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Cancel a planned audit.
    Remove { id: String },
    /// Print a draft audit pre-filled from a planned audit.
    Draft {
        id: String,
        #[arg(long, default_value = "")]
        interviewee: String,
    },
}
