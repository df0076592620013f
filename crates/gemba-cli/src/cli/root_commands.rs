use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ActionCommands, AuditCommands, GoalCommands, ScheduleCommands, StatsCommands,
};

/// Root commands for the `gemba` CLI.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the audit checklist, optionally for one department.
    Catalog(CatalogArgs),
    /// Score a draft audit without storing it.
    Score(DraftArgs),
    /// Finalize a draft audit and raise its corrective actions.
    Finalize(FinalizeArgs),
    /// Finalized audit history.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Corrective action follow-up.
    Action {
        #[command(subcommand)]
        action: ActionCommands,
    },
    /// Planned audits.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
    /// Department score goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Reporting over the audit history.
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },
    /// Upcoming audits and open action deadlines.
    Agenda(AgendaArgs),
    /// Rebuild state from the JSONL trail.
    Rebuild(RebuildArgs),
}

/// Arguments for `gemba catalog`.
#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Only list questions that apply to this department.
    #[arg(long)]
    pub department: Option<String>,
    /// List the known departments instead of questions.
    #[arg(long)]
    pub departments: bool,
}

/// Arguments for `gemba score`.
#[derive(Clone, Debug, Args)]
pub struct DraftArgs {
    /// Path to a draft audit JSON file, or `-` for stdin.
    pub file: PathBuf,
}

/// Arguments for `gemba finalize`.
#[derive(Clone, Debug, Args)]
pub struct FinalizeArgs {
    /// Path to a draft audit JSON file, or `-` for stdin.
    pub file: PathBuf,
    /// Finalization day (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for `gemba agenda`.
#[derive(Clone, Debug, Args)]
pub struct AgendaArgs {
    #[arg(long)]
    pub department: Option<String>,
    /// Reference day for the overdue flag (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for `gemba rebuild`.
#[derive(Clone, Debug, Args)]
pub struct RebuildArgs {
    /// Count trail files and operations without replaying.
    #[arg(long)]
    pub dry_run: bool,
    /// Trail directory to replay instead of the configured one.
    #[arg(long)]
    pub trail_dir: Option<PathBuf>,
}
